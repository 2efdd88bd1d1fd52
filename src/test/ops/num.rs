use super::*;

#[test]
fn of_a_fraction() {
    // 2/3 = ldi 2; ldi 3; div
    let mut process = run_image(image![(Ldi, 2), (Ldi, 3), (Div), (Num), (Hcf)]);
    assert_eq!(pop(&mut process), q!(2));
}

#[test]
fn sign_lives_on_the_numerator() {
    let mut process = run_image(image![(Ldi, -2), (Ldi, 3), (Div), (Num), (Hcf)]);
    assert_eq!(pop(&mut process), q!(-2));
}

#[test]
fn of_an_integer() {
    let mut process = run_image(image![(Ldi, 5), (Num), (Hcf)]);
    assert_eq!(pop(&mut process), q!(5));
}
