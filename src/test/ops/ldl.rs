use super::*;

#[test]
fn reads_a_frame_slot() {
    let mut process = run_image(image![
        (Ent, 2),
        (Ldi, 7),
        (Stl, 0),
        (Ldl, 0),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(7));
}

#[test]
fn slots_are_indexed_from_the_top() {
    let mut process = run_image(image![
        (Ent, 2),
        (Ldi, 7),
        (Stl, 1),
        (Ldl, 0),
        (Ldl, 1),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(7));
    assert_eq!(pop(&mut process), Q::zero());
}
