use payloads::{PaymentId, PaymentMethod, ViolationId, requests, responses};
use rust_decimal::Decimal;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::fetch_state::{FetchAction, FetchLifecycle};
use crate::hooks::{FetchHookReturn, use_fetch, use_fetch_with_apply};

#[derive(Clone)]
pub struct PaymentsHandle {
    dispatcher:
        UseReducerDispatcher<FetchLifecycle<Vec<responses::Payment>>>,
}

impl PaymentsHandle {
    /// Create the pending payment record for an approved violation.
    pub async fn create_fine_payment(
        &self,
        violation_id: ViolationId,
    ) -> Result<responses::Payment, String> {
        let api_client = get_api_client();
        let details = requests::CreateFinePayment { violation_id };
        let payment = api_client
            .create_fine_payment(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = payment.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |payments: &mut Vec<responses::Payment>| {
                payments.insert(0, created);
            },
        )));
        Ok(payment)
    }

    pub async fn deposit(
        &self,
        amount: Decimal,
        payment_method: PaymentMethod,
    ) -> Result<responses::Payment, String> {
        let api_client = get_api_client();
        let details = requests::DepositToWallet {
            amount,
            payment_method,
        };
        let payment = api_client
            .deposit_to_wallet(&details)
            .await
            .map_err(|e| e.to_string())?;

        let created = payment.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |payments: &mut Vec<responses::Payment>| {
                payments.insert(0, created);
            },
        )));
        Ok(payment)
    }

    pub async fn pay_from_wallet(
        &self,
        payment_id: PaymentId,
    ) -> Result<responses::Payment, String> {
        let api_client = get_api_client();
        let payment = api_client
            .pay_fine_from_wallet(&payment_id)
            .await
            .map_err(|e| e.to_string())?;

        let paid = payment.clone();
        self.dispatcher.dispatch(FetchAction::Apply(Box::new(
            move |payments: &mut Vec<responses::Payment>| {
                if let Some(existing) =
                    payments.iter_mut().find(|p| p.id == paid.id)
                {
                    *existing = paid;
                }
            },
        )));
        Ok(payment)
    }

    /// Fetch a receipt for display; read-only, nothing to splice.
    pub async fn receipt(
        &self,
        payment_id: PaymentId,
    ) -> Result<responses::PaymentReceipt, String> {
        let api_client = get_api_client();
        api_client
            .payment_receipt(&payment_id)
            .await
            .map_err(|e| e.to_string())
    }
}

/// Hook for the logged-in citizen's payments.
#[hook]
pub fn use_my_payments()
-> (FetchHookReturn<Vec<responses::Payment>>, PaymentsHandle) {
    let (fetch, dispatcher) = use_fetch_with_apply((), move || async move {
        let api_client = get_api_client();
        api_client.my_payments().await.map_err(|e| e.to_string())
    });

    (fetch, PaymentsHandle { dispatcher })
}

/// Hook for the wallet balance card. Refetch after deposits and wallet
/// payments to pick up the new balance.
#[hook]
pub fn use_wallet_summary() -> FetchHookReturn<responses::WalletSummary> {
    use_fetch((), move || async move {
        let api_client = get_api_client();
        api_client.wallet_summary().await.map_err(|e| e.to_string())
    })
}
