use super::*;

#[test]
fn produces_exact_fractions() {
    let mut process = run_image(image![(Ldi, 1), (Ldi, 2), (Div), (Hcf)]);
    assert_eq!(pop(&mut process), q!(1, 2));
}

#[test]
fn by_zero_is_fatal() {
    let fault = run_fault(image![(Ldi, 1), (Ldi, 0), (Div), (Hcf)]);
    assert_eq!(fault, Error::DivisionByZero);
}
