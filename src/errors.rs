error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Clap(::clap::Error);
        Io(::std::io::Error);
        Logger(::log::SetLoggerError);
    }

    errors {
        UndefinedFieldValue(x: f64, y: f64) {
            description("The scalar field is undefined at this point.")
            display("The scalar field is undefined at ({}, {})", x, y)
        }
        InvalidSpec(msg: String) {
            description("Invalid surface spec.")
            display("Invalid surface spec: '{}'", msg)
        }
    }
}
