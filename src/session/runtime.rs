use crate::error::AppError;
use crate::session::round::{Deps, Msg, RoundModel, run_effect, update};

/// Runs the update loop for one message: applies `init_msg` and drains the
/// effects it produces.
///
/// # Errors
///
/// Will return `Err` with the failure an effect reported; the failure is
/// also recorded on the model.
pub async fn run_round(
    model: &mut RoundModel,
    init_msg: Msg,
    deps: Deps<'_>,
) -> Result<(), AppError> {
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        let msg = run_effect(effect, model, deps).await;
        match msg {
            Msg::Failed(e) => {
                // Record failure and stop the loop.
                update(model, Msg::Failed(e.clone()));
                return Err(e);
            }
            other => {
                let next = update(model, other);
                effects.extend(next);
            }
        }
    }
    Ok(())
}
