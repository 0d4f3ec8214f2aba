use super::error::RuntimeError;
use crate::core::TransitionState;
use crate::machine::Transitioned;
use crate::policy::TransitionPolicy;
use crate::timer::{DeadlineTimer, TimerId};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

enum Command<T> {
    Target(Option<T>),
    Dispose,
}

/// Handle to a transitioned value running in a background task.
///
/// Dropping the handle closes the command channel, which disposes the value
/// and ends the task.
pub struct TransitionHandle<T> {
    commands: mpsc::UnboundedSender<Command<T>>,
    states: watch::Receiver<TransitionState<T>>,
    task: JoinHandle<()>,
}

/// Run `value` in a background task.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```rust
/// use transitioned::builder::TransitionedBuilder;
/// use transitioned::runtime::spawn;
/// use transitioned::timer::DeadlineTimer;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let value = TransitionedBuilder::new()
///     .initial("a")
///     .delay_ms(10)
///     .build(DeadlineTimer::new())?;
///
/// let handle = spawn(value);
/// let mut states = handle.subscribe();
///
/// handle.set_target("b")?;
/// states.changed().await?;
/// assert_eq!(states.borrow().previous, Some("a"));
///
/// states.changed().await?;
/// assert!(!states.borrow().transition);
///
/// handle.dispose().await?;
/// # Ok(())
/// # }
/// ```
pub fn spawn<T, P>(value: Transitioned<T, P, DeadlineTimer>) -> TransitionHandle<T>
where
    T: Clone + Send + Sync + 'static,
    P: TransitionPolicy<T> + Send + 'static,
{
    let (commands, receiver) = mpsc::unbounded_channel();
    let (publisher, states) = watch::channel(value.snapshot());
    let task = tokio::spawn(drive(value, receiver, publisher));

    TransitionHandle {
        commands,
        states,
        task,
    }
}

impl<T> TransitionHandle<T> {
    /// Send a new target value.
    pub fn set_target(&self, target: impl Into<Option<T>>) -> Result<(), RuntimeError> {
        self.commands
            .send(Command::Target(target.into()))
            .map_err(|_| RuntimeError::Closed)
    }

    /// Latest published snapshot.
    pub fn state(&self) -> TransitionState<T>
    where
        T: Clone,
    {
        self.states.borrow().clone()
    }

    /// Receiver notified on every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TransitionState<T>> {
        self.states.clone()
    }

    /// Dispose the value and wait for the task to finish.
    pub async fn dispose(self) -> Result<(), RuntimeError> {
        // A closed channel means the task is already winding down.
        let _ = self.commands.send(Command::Dispose);
        self.task.await?;
        Ok(())
    }
}

async fn drive<T, P>(
    mut value: Transitioned<T, P, DeadlineTimer>,
    mut commands: mpsc::UnboundedReceiver<Command<T>>,
    publisher: watch::Sender<TransitionState<T>>,
) where
    T: Clone,
    P: TransitionPolicy<T>,
{
    let mut published = value.revision();

    loop {
        let deadline = value.timer().deadline();

        tokio::select! {
            command = commands.recv() => match command {
                Some(Command::Target(target)) => value.on_target_changed(target),
                Some(Command::Dispose) | None => {
                    value.on_dispose();
                    break;
                }
            },
            id = expiry(deadline) => {
                value.fire(id);
            }
        }

        if value.revision() != published {
            published = value.revision();
            publisher.send_replace(value.snapshot());
        }
    }

    debug!("transition task finished");
}

async fn expiry(deadline: Option<(TimerId, Instant)>) -> TimerId {
    match deadline {
        Some((id, at)) => {
            sleep_until(at).await;
            id
        }
        None => std::future::pending().await,
    }
}
