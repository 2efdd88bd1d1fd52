use super::*;

#[test]
fn terminates_the_run() {
    let words = image![(Hcf)];
    let mut process = Process::new(&words);

    assert_eq!(process.run(), Ok(Outcome::Terminated));
}

#[test]
fn leaves_the_program_register_on_itself() {
    let process = run_image(image![(Ldi, 1), (Hcf)]);
    assert_eq!(process.register(RegisterId::PR), &q!(1));
}
