use api::api::WalletApi;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::warn;
use types::notice::Notice;

use crate::{Command, Effect, FormEvent, SendForm};

/// Runs a [`SendForm`] against a live API. Input events go through
/// [`WorkflowDriver::dispatch`]; every command the form issues is executed
/// on its own task and its resolution comes back through one channel, so
/// the form itself is only ever touched from the caller's task.
pub struct WorkflowDriver {
    form: SendForm,
    client: Box<dyn WalletApi>,
    events_tx: UnboundedSender<FormEvent>,
    events_rx: UnboundedReceiver<FormEvent>,
    in_flight: usize,
    notices: Vec<Notice>,
}

impl WorkflowDriver {
    #[must_use]
    pub fn new(client: Box<dyn WalletApi>, wallet_id: impl Into<String>) -> Self {
        let (events_tx, events_rx) = unbounded_channel();
        Self {
            form: SendForm::new(wallet_id),
            client,
            events_tx,
            events_rx,
            in_flight: 0,
            notices: Vec::new(),
        }
    }

    #[must_use]
    pub const fn form(&self) -> &SendForm {
        &self.form
    }

    /// Notices accumulated since the last call, oldest first.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn dispatch(&mut self, event: FormEvent) {
        for effect in self.form.apply(event) {
            match effect {
                Effect::Notify(notice) => self.notices.push(notice),
                Effect::Request(command) => self.launch(command),
            }
        }
    }

    /// Waits until every request in flight has resolved and been applied,
    /// including any follow-up requests those resolutions trigger.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(event) = self.events_rx.recv().await else {
                warn!("event channel closed with requests in flight");
                break;
            };
            self.in_flight -= 1;
            self.dispatch(event);
        }
    }

    fn launch(&mut self, command: Command) {
        self.in_flight += 1;
        let client = dyn_clone::clone_box(&*self.client);
        let events_tx = self.events_tx.clone();
        tokio::spawn(async move {
            let event = run_command(client.as_ref(), command).await;
            // The driver may be gone by the time a request resolves.
            let _ = events_tx.send(event);
        });
    }
}

async fn run_command(client: &dyn WalletApi, command: Command) -> FormEvent {
    match command {
        Command::ValidateAddress {
            address,
            generation,
        } => FormEvent::AddressChecked {
            generation,
            result: client.validate_address(&address).await,
        },
        Command::FetchFeeRates => FormEvent::TiersLoaded(client.fee_rates().await),
        Command::FetchBalance { wallet_id } => {
            FormEvent::BalanceLoaded(client.wallet_balance(&wallet_id).await)
        }
        Command::EstimateFee {
            wallet_id,
            recipient,
            amount_btc,
            version,
        } => FormEvent::FeeEstimated {
            version,
            result: client.estimate_fee(&wallet_id, &recipient, amount_btc).await,
        },
        Command::CreateTransaction {
            wallet_id,
            recipient,
            amount_btc,
            fee_rate,
        } => FormEvent::SubmitFinished(
            client
                .create_transaction(&wallet_id, &recipient, amount_btc, fee_rate)
                .await,
        ),
    }
}
