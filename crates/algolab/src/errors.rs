//! Error handling and exit codes.

use algolab_core::constants::exit_codes;
use algolab_core::AlgoError;

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let code = match err.downcast_ref::<AlgoError>() {
        Some(
            AlgoError::InvalidInput(_)
            | AlgoError::UnknownAlgorithm(_)
            | AlgoError::UnknownLanguage(_),
        ) => exit_codes::ERROR_INPUT,
        None => exit_codes::ERROR_GENERIC,
    };
    u8::try_from(code).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_4() {
        let err = anyhow::Error::new(AlgoError::InvalidInput("bad".into()));
        assert_eq!(exit_code(&err), 4);
        let err = anyhow::Error::new(AlgoError::UnknownAlgorithm("x".into()));
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn context_does_not_hide_input_errors() {
        let err = anyhow::Error::new(AlgoError::UnknownLanguage("cobol".into()))
            .context("while showing listing");
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn other_errors_exit_1() {
        let err = anyhow::anyhow!("address in use");
        assert_eq!(exit_code(&err), 1);
    }
}
