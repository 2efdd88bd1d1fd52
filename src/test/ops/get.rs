use super::*;

#[test]
fn reads_back_what_the_program_wrote() {
    let mut process = run_image(image![
        (Ldi, 7),
        (Ldi, STDOUT),
        (Put),
        (Ldi, STDOUT),
        (Get),
        (Hcf)
    ]);

    assert_eq!(pop(&mut process), q!(7));
}

#[test]
fn blocks_on_an_empty_stream() {
    let words = image![(Ldi, STDIN), (Get), (Hcf)];
    let mut process = Process::new(&words);

    assert_eq!(process.run(), Ok(Outcome::Blocked));
}

#[test]
fn reports_a_drained_closed_stream() {
    let words = image![(Ldi, STDIN), (Get), (Hcf)];
    let mut process = Process::new(&words);
    process.close(STDIN);

    assert_eq!(process.run(), Ok(Outcome::Closed));
}
