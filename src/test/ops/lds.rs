use super::*;

#[test]
fn reads_an_image_cell() {
    let mut process = run_image(image![(Lds, 2), (Hcf), (Ldi, 13)]);
    assert_eq!(pop(&mut process), q!(13));
}

#[test]
fn cells_past_the_image_read_zero() {
    let mut process = run_image(image![(Lds, 50), (Hcf)]);
    assert_eq!(pop(&mut process), Q::zero());
}
