use super::*;

#[test]
fn calls_the_operand() {
    let mut process = run_image(image![(Cls, 2), (Hcf), (Ldi, 13), (Ret)]);
    assert_eq!(pop(&mut process), q!(13));
}

#[test]
fn nested_calls_unwind_in_order() {
    let mut process = run_image(image![
        (Cls, 2),
        (Hcf),
        (Cls, 4),
        (Ret),
        (Ldi, 5),
        (Ret)
    ]);

    assert_eq!(pop(&mut process), q!(5));
}
