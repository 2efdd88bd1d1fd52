use super::*;

#[test]
fn empty_stream() {
    let mut process = run_image(image![(Ldi, STDOUT), (Tel), (Hcf)]);
    assert_eq!(pop(&mut process), Q::zero());
}

#[test]
fn counts_pending_values() {
    let words = image![(Ldi, STDIN), (Tel), (Hcf)];
    let mut process = Process::new(&words);
    process.write(STDIN, "abc");

    assert_eq!(process.run(), Ok(Outcome::Terminated));
    assert_eq!(process.pop_data(), Ok(q!(3)));
}
