use super::*;

#[test]
fn of_a_fraction() {
    let mut process = run_image(image![(Ldi, 2), (Ldi, 3), (Div), (Den), (Hcf)]);
    assert_eq!(pop(&mut process), q!(3));
}

#[test]
fn of_an_integer_is_one() {
    let mut process = run_image(image![(Ldi, 5), (Den), (Hcf)]);
    assert_eq!(pop(&mut process), q!(1));
}
