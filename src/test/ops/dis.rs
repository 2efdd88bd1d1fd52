use super::*;

#[test]
fn discards_the_top() {
    let mut process = run_image(image![(Ldi, 1), (Ldi, 2), (Dis), (Hcf)]);
    assert_eq!(pop(&mut process), q!(1));
}
