use super::*;

#[test]
fn taken_on_nonzero() {
    let mut process = run_image(image![
        (Ldi, 1),
        (Bne, 4),
        (Ldi, 99),
        (Hcf),
        (Ldi, 7),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(7));
}

#[test]
fn not_taken_on_zero() {
    let mut process = run_image(image![
        (Ldi, 0),
        (Bne, 4),
        (Ldi, 99),
        (Hcf),
        (Ldi, 7),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(99));
}
