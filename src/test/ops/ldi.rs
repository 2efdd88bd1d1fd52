use super::*;

#[test]
fn pushes_the_operand() {
    let mut process = run_image(image![(Ldi, 13), (Hcf)]);
    assert_eq!(pop(&mut process), q!(13));
}

#[test]
fn negative_operand() {
    let mut process = run_image(image![(Ldi, -5), (Hcf)]);
    assert_eq!(pop(&mut process), q!(-5));
}
