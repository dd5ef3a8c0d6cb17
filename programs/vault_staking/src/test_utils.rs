use anchor_lang::error::Error;

/// Numeric error code of an Anchor error, for comparing against `StakingError` variants.
pub fn error_code(err: Error) -> u32 {
    match err {
        Error::AnchorError(err) => err.error_code_number,
        Error::ProgramError(err) => panic!("expected an Anchor error, got {err:?}"),
    }
}
