use anyhow::Result;
use inquire::InquireError;
use tokio_util::sync::CancellationToken;
use tracing::debug;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs interactive prompts, treating Ctrl+C or Escape as a clean exit.
///
/// Returns `Ok(None)` when the user cancels; other errors propagate.
pub fn handle_prompt_cancellation<T, F>(f: F) -> Result<Option<T>>
where
    F: FnOnce() -> Result<T>,
{
    match f() {
        Ok(value) => Ok(Some(value)),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Runs `work` to completion, cancelling `token` if Ctrl+C arrives first.
///
/// Returns the output of `work` and whether it was interrupted.
pub async fn until_interrupted<F: Future>(
    work: F,
    token: &CancellationToken,
) -> (F::Output, bool) {
    run_cancellable(work, async { tokio::signal::ctrl_c().await.is_ok() }, token).await
}

/// Runs `work` to completion, cancelling `token` if `interrupt` resolves to
/// `true` first. A `false` interrupt is ignored.
pub async fn run_cancellable<F, I>(
    work: F,
    interrupt: I,
    token: &CancellationToken,
) -> (F::Output, bool)
where
    F: Future,
    I: Future<Output = bool>,
{
    tokio::pin!(work);
    tokio::select! {
        output = &mut work => (output, false),
        true = interrupt => {
            debug!("interrupted, cancelling in-flight requests");
            token.cancel();
            (work.await, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_passes_through() {
        let result = handle_prompt_cancellation(|| Ok("secret"));
        assert!(matches!(result, Ok(Some("secret"))));
    }

    #[test]
    fn test_cancellation_is_none() {
        for err in [
            InquireError::OperationCanceled,
            InquireError::OperationInterrupted,
        ] {
            let result: Result<Option<()>> = handle_prompt_cancellation(|| Err(err.into()));
            assert!(matches!(result, Ok(None)));
        }
    }

    #[test]
    fn test_other_errors_propagate() {
        let result: Result<Option<()>> =
            handle_prompt_cancellation(|| Err(anyhow::anyhow!("terminal gone")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("terminal gone"));
    }

    #[tokio::test]
    async fn test_interrupt_cancels_token_and_waits_for_work() {
        let token = CancellationToken::new();
        let work = async {
            token.cancelled().await;
            "stopped"
        };

        let (output, interrupted) = run_cancellable(work, async { true }, &token).await;

        assert_eq!(output, "stopped");
        assert!(interrupted);
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn test_finished_work_is_not_interrupted() {
        let token = CancellationToken::new();

        let (output, interrupted) =
            run_cancellable(async { 7 }, std::future::pending::<bool>(), &token).await;

        assert_eq!(output, 7);
        assert!(!interrupted);
        assert!(!token.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_interrupt_is_ignored() {
        let token = CancellationToken::new();
        let work = async {
            tokio::task::yield_now().await;
            "done"
        };

        let (output, interrupted) = run_cancellable(work, async { false }, &token).await;

        assert_eq!(output, "done");
        assert!(!interrupted);
        assert!(!token.is_cancelled());
    }
}
