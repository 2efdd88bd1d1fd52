use super::*;

#[test]
fn reads_through_a_popped_address() {
    let mut process = run_image(image![
        (New, 2),
        (Dup),
        (Ldi, 7),
        (Swp),
        (Std, 1),
        (Dup),
        (Ldd, 1),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(7));
}

#[test]
fn out_of_bounds_is_fatal() {
    let fault = run_fault(image![(New, 2), (Ldd, 5), (Hcf)]);
    assert!(matches!(fault, Error::OutOfBounds { .. }));
}
