use super::*;

#[test]
fn reads_the_data_register() {
    let mut process = run_image(image![(Ldr, 1), (Hcf)]);

    // The data stack holds argv, so DR sits one past its base.
    assert_eq!(pop(&mut process), q!(1) + q!(1, 2));
}

#[test]
fn invalid_index_is_fatal() {
    let fault = run_fault(image![(Ldr, 7), (Hcf)]);
    assert!(matches!(fault, Error::InvalidRegister(_)));

    let fault = run_fault(image![(Ldr, -1), (Hcf)]);
    assert!(matches!(fault, Error::InvalidRegister(_)));
}
