use super::*;

#[test]
fn writes_a_frame_slot() {
    let mut process = run_image(image![
        (Ent, 1),
        (Ldi, 42),
        (Stl, 0),
        (Ldl, 0),
        (Ldl, 0),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(42));
    assert_eq!(pop(&mut process), q!(42));
}

#[test]
fn without_a_frame_is_fatal() {
    let fault = run_fault(image![(Ldi, 1), (Stl, 0), (Hcf)]);
    assert!(matches!(fault, Error::NegativeOffset(_)));
}
