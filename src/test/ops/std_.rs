use super::*;

#[test]
fn writes_through_a_popped_address() {
    let process = run_image(image![
        (New, 2),
        (Ldi, 7),
        (Swp),
        (Std, 1),
        (Hcf)
    ]);

    // First base minted after the three process arrays.
    let base = q!(3, 4);
    assert_eq!(process.memory().read(&(q!(1) + &base)), Ok(q!(7)));
    assert_eq!(process.memory().read(&base), Ok(Q::zero()));
}
