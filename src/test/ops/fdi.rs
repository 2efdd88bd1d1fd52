use super::*;

#[test]
fn floors_the_quotient() {
    let mut process = run_image(image![(Ldi, 7), (Fdi, 2), (Hcf)]);
    assert_eq!(pop(&mut process), q!(3));
}

#[test]
fn rounds_toward_negative_infinity() {
    let mut process = run_image(image![(Ldi, -7), (Fdi, 2), (Hcf)]);
    assert_eq!(pop(&mut process), q!(-4));
}

#[test]
fn by_zero_is_fatal() {
    let fault = run_fault(image![(Ldi, 1), (Fdi, 0), (Hcf)]);
    assert_eq!(fault, Error::DivisionByZero);
}
