use super::*;

#[test]
fn writes_an_image_cell() {
    let mut process = run_image(image![(Ldi, 13), (Sts, 10), (Lds, 10), (Hcf)]);
    assert_eq!(pop(&mut process), q!(13));
}
