pub mod default_handler;

use crate::{ApiError, AppData};

pub(crate) fn ensure_can_edit(state: &AppData) -> Result<(), ApiError> {
    if !state.capabilities.can_edit {
        return Err(ApiError::Forbidden(
            "editing is disabled for this user".to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn ensure_can_save(state: &AppData) -> Result<(), ApiError> {
    if !state.capabilities.can_save {
        return Err(ApiError::Forbidden(
            "saving tactics is disabled for this user".to_string(),
        ));
    }

    Ok(())
}
