use super::*;

#[test]
fn writing_the_program_register_jumps() {
    let mut process = run_image(image![(Ldi, 3), (Str, 0), (Ldi, 99), (Hcf)]);

    // The skipped cell left nothing; only argv remains below.
    assert_eq!(pop(&mut process), q!(1, 4));
}

#[test]
fn invalid_index_is_fatal() {
    let fault = run_fault(image![(Ldi, 1), (Str, 9), (Hcf)]);
    assert!(matches!(fault, Error::InvalidRegister(_)));
}
