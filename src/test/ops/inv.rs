use super::*;

#[test]
fn reciprocal() {
    let mut process = run_image(image![(Ldi, 2), (Inv), (Hcf)]);
    assert_eq!(pop(&mut process), q!(1, 2));
}

#[test]
fn of_zero_is_fatal() {
    let fault = run_fault(image![(Ldi, 0), (Inv), (Hcf)]);
    assert_eq!(fault, Error::DivisionByZero);
}
