use super::*;

#[test]
fn adds_the_operand() {
    let mut process = run_image(image![(Ldi, 5), (Adi, 3), (Hcf)]);
    assert_eq!(pop(&mut process), q!(8));
}

#[test]
fn negative_operand() {
    let mut process = run_image(image![(Ldi, 40), (Adi, -45), (Hcf)]);
    assert_eq!(pop(&mut process), q!(-5));
}
