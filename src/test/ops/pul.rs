use super::*;

#[test]
fn removes_the_array_tail() {
    let mut process = run_image(image![
        (New, 0),
        (Dup),
        (Ldi, 9),
        (Swp),
        (Psh),
        (Dup),
        (Pul),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(9));

    let base = pop(&mut process);
    assert_eq!(process.memory().size(&base), Ok(0));
}

#[test]
fn from_an_empty_array_is_fatal() {
    let fault = run_fault(image![(New, 0), (Pul), (Hcf)]);
    assert_eq!(fault, Error::StackUnderflow(q!(3, 4)));
}
