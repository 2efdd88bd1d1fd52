use super::*;

#[test]
fn freed_bases_are_reused_lifo() {
    let mut process = run_image(image![(New, 1), (Del), (New, 2), (Hcf)]);

    let base = pop(&mut process);
    assert_eq!(base, q!(3, 4));
    assert_eq!(process.memory().size(&base), Ok(2));
}

#[test]
fn double_free_is_fatal() {
    let fault = run_fault(image![(New, 1), (Dup), (Del), (Del), (Hcf)]);
    assert_eq!(fault, Error::Freed(q!(3, 4)));
}

#[test]
fn freeing_the_image_is_fatal() {
    let fault = run_fault(image![(Ldi, 0), (Del), (Hcf)]);
    assert_eq!(fault, Error::Reserved(Q::zero()));
}
