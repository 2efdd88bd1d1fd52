use super::*;

#[test]
fn positive_operands() {
    let mut process = run_image(image![(Ldi, 7), (Ldi, 3), (Mod), (Hcf)]);
    assert_eq!(pop(&mut process), q!(1));
}

#[test]
fn result_follows_divisor_sign() {
    let mut process = run_image(image![(Ldi, -7), (Ldi, 3), (Mod), (Hcf)]);
    assert_eq!(pop(&mut process), q!(2));

    let mut process = run_image(image![(Ldi, 7), (Ldi, -3), (Mod), (Hcf)]);
    assert_eq!(pop(&mut process), q!(-2));
}

#[test]
fn by_zero_is_fatal() {
    let fault = run_fault(image![(Ldi, 1), (Ldi, 0), (Mod), (Hcf)]);
    assert_eq!(fault, Error::DivisionByZero);
}
