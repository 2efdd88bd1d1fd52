use super::*;

#[test]
fn pushes_the_array_length() {
    let mut process = run_image(image![(New, 5), (Siz), (Hcf)]);
    assert_eq!(pop(&mut process), q!(5));
}

#[test]
fn the_image_has_a_size_too() {
    let mut process = run_image(image![(Ldi, 0), (Siz), (Hcf)]);
    assert_eq!(pop(&mut process), q!(3));
}
