use super::*;

#[test]
fn enqueues_on_the_named_stream() {
    let words = image![(Ldi, 72), (Ldi, STDOUT), (Put), (Hcf)];
    let mut process = Process::new(&words);

    assert_eq!(process.run(), Ok(Outcome::Terminated));
    assert_eq!(process.read(STDOUT), "H");
}

#[test]
fn preserves_write_order() {
    let words = image![
        (Ldi, 72),
        (Ldi, STDOUT),
        (Put),
        (Ldi, 105),
        (Ldi, STDOUT),
        (Put),
        (Hcf)
    ];
    let mut process = Process::new(&words);

    assert_eq!(process.run(), Ok(Outcome::Terminated));
    assert_eq!(process.read(STDOUT), "Hi");
}
