use lispy::value::{render, Value};


pub fn setup() {
    // Integration tests will call this method multiple times; ignore the error.
    if let Err(_err) = env_logger::try_init() {}
}

pub fn result<S: AsRef<str>>(s: S) -> Value {
    setup();
    lispy::eval_line(s).unwrap()
}

pub fn rendered<S: AsRef<str>>(s: S) -> String {
    render(&result(s))
}
