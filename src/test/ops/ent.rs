use super::*;

#[test]
fn reserves_zeroed_cells() {
    let mut process = run_image(image![(Ent, 3), (Ldl, 1), (Hcf)]);

    assert_eq!(pop(&mut process), Q::zero());
    assert_eq!(process.register(RegisterId::CR), &(q!(3) + q!(1, 3)));
}
