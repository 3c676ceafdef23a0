use payloads::{PaymentId, PaymentMethod, PaymentStatus, responses};
use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::{StatCard, StatusBadge};
use crate::contexts::toast::use_toast;
use crate::hooks::{use_my_payments, use_wallet_summary};
use crate::status::AsStatusDisplay;
use crate::utils::{format_timestamp, format_vnd};

fn parse_method(value: &str) -> PaymentMethod {
    match value {
        "credit_card" => PaymentMethod::CreditCard,
        "e_wallet" => PaymentMethod::EWallet,
        _ => PaymentMethod::BankTransfer,
    }
}

#[function_component]
pub fn PaymentsPage() -> Html {
    let toast = use_toast();

    let (payments, handle) = use_my_payments();
    let wallet = use_wallet_summary();

    let deposit_amount = use_state(String::new);
    let deposit_method = use_state(|| PaymentMethod::BankTransfer);
    let busy_payment = use_state(|| None::<PaymentId>);
    let receipt = use_state(|| None::<responses::PaymentReceipt>);

    let on_amount = {
        let deposit_amount = deposit_amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            deposit_amount.set(input.value());
        })
    };

    let on_method = {
        let deposit_method = deposit_method.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            deposit_method.set(parse_method(&select.value()));
        })
    };

    let on_deposit = {
        let deposit_amount = deposit_amount.clone();
        let deposit_method = deposit_method.clone();
        let handle = handle.clone();
        let toast = toast.clone();
        let wallet_refetch = wallet.refetch.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Ok(amount) = deposit_amount.parse::<Decimal>() else {
                toast.error("Enter a valid amount");
                return;
            };
            if amount <= Decimal::ZERO {
                toast.error("Deposit amount must be positive");
                return;
            }

            let handle = handle.clone();
            let toast = toast.clone();
            let wallet_refetch = wallet_refetch.clone();
            let deposit_amount = deposit_amount.clone();
            let method = *deposit_method;

            yew::platform::spawn_local(async move {
                match handle.deposit(amount, method).await {
                    Ok(_) => {
                        toast.success("Deposit recorded");
                        deposit_amount.set(String::new());
                        wallet_refetch.emit(());
                    }
                    Err(message) => toast.error(message),
                }
            });
        })
    };

    let pay_from_wallet = {
        let handle = handle.clone();
        let toast = toast.clone();
        let busy_payment = busy_payment.clone();
        let wallet_refetch = wallet.refetch.clone();

        move |payment_id: PaymentId| {
            let handle = handle.clone();
            let toast = toast.clone();
            let busy_payment = busy_payment.clone();
            let wallet_refetch = wallet_refetch.clone();

            busy_payment.set(Some(payment_id));
            yew::platform::spawn_local(async move {
                match handle.pay_from_wallet(payment_id).await {
                    Ok(_) => {
                        toast.success("Fine paid from wallet");
                        wallet_refetch.emit(());
                    }
                    Err(message) => toast.error(message),
                }
                busy_payment.set(None);
            });
        }
    };

    let show_receipt = {
        let handle = handle.clone();
        let toast = toast.clone();
        let receipt = receipt.clone();

        move |payment_id: PaymentId| {
            let handle = handle.clone();
            let toast = toast.clone();
            let receipt = receipt.clone();

            yew::platform::spawn_local(async move {
                match handle.receipt(payment_id).await {
                    Ok(fetched) => receipt.set(Some(fetched)),
                    Err(message) => toast.error(message),
                }
            });
        }
    };

    html! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold text-neutral-900 dark:text-white">
                {"Payments & wallet"}
            </h1>

            <div class="grid sm:grid-cols-3 gap-4">
                {wallet.render("wallet", |wallet, _, _| html! {
                    <>
                        <StatCard
                            label="Balance"
                            value={format_vnd(&wallet.balance)}
                        />
                        <StatCard
                            label="Total deposited"
                            value={format_vnd(&wallet.total_deposited)}
                        />
                        <StatCard
                            label="Pending fines"
                            value={wallet.pending_fines.to_string()}
                        />
                    </>
                })}
            </div>

            <form
                onsubmit={on_deposit}
                class="flex flex-wrap items-end gap-3 p-4 rounded-lg border border-neutral-200 dark:border-neutral-800"
            >
                <div>
                    <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-1">
                        {"Deposit amount (₫)"}
                    </label>
                    <input
                        type="number"
                        min="1000"
                        step="1000"
                        value={(*deposit_amount).clone()}
                        oninput={on_amount}
                        class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm w-44"
                    />
                </div>
                <select
                    onchange={on_method}
                    class="px-3 py-2 rounded-md border border-neutral-300 dark:border-neutral-700 bg-white dark:bg-neutral-900 text-sm"
                >
                    <option value="bank_transfer" selected={*deposit_method == PaymentMethod::BankTransfer}>{"Bank transfer"}</option>
                    <option value="credit_card" selected={*deposit_method == PaymentMethod::CreditCard}>{"Credit card"}</option>
                    <option value="e_wallet" selected={*deposit_method == PaymentMethod::EWallet}>{"E-wallet"}</option>
                </select>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium"
                >
                    {"Deposit"}
                </button>
            </form>

            if let Some(current) = &*receipt {
                <div class="p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-neutral-50 dark:bg-neutral-800/50 space-y-1">
                    <div class="flex items-center justify-between">
                        <h3 class="font-semibold text-neutral-900 dark:text-white">
                            {format!("Receipt {}", current.receipt_number)}
                        </h3>
                        <button
                            onclick={{
                                let receipt = receipt.clone();
                                Callback::from(move |_| receipt.set(None))
                            }}
                            class="text-sm underline"
                        >
                            {"Close"}
                        </button>
                    </div>
                    <p class="text-sm text-neutral-600 dark:text-neutral-400">
                        {format_vnd(&current.amount)}
                        {" · "}
                        {format_timestamp(current.paid_at)}
                    </p>
                    if let Some(payer) = &current.payer_name {
                        <p class="text-sm text-neutral-600 dark:text-neutral-400">
                            {format!("Paid by {payer}")}
                        </p>
                    }
                </div>
            }

            {payments.render("payments", |payments, is_refreshing, error| html! {
                <div class="space-y-3">
                    if let Some(error) = error {
                        <div class="p-3 rounded-md bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 dark:text-red-400">
                                {format!("Refresh failed: {error}")}
                            </p>
                        </div>
                    }
                    if is_refreshing {
                        <p class="text-sm text-neutral-500">{"Refreshing..."}</p>
                    }
                    if payments.is_empty() {
                        <p class="text-center py-12 text-neutral-600 dark:text-neutral-400">
                            {"No payments yet"}
                        </p>
                    }
                    {for payments.iter().map(|payment| {
                        let payment_id = payment.id;
                        let busy = *busy_payment == Some(payment_id);

                        html! {
                            <div
                                key={payment.id.0}
                                class="flex items-center justify-between p-4 rounded-lg border border-neutral-200 dark:border-neutral-800 bg-white dark:bg-neutral-900"
                            >
                                <div class="space-y-1">
                                    <div class="flex items-center space-x-2">
                                        <span class="font-semibold text-neutral-900 dark:text-white">
                                            {format_vnd(&payment.amount)}
                                        </span>
                                        <StatusBadge display={payment.status.display()} />
                                    </div>
                                    <p class="text-xs text-neutral-500">
                                        {format_timestamp(payment.created_at)}
                                        if payment.violation_id.is_some() {
                                            {" · traffic fine"}
                                        } else {
                                            {" · wallet deposit"}
                                        }
                                        if let Some(due) = payment.due_date {
                                            {format!(" · due {}", format_timestamp(due))}
                                        }
                                    </p>
                                </div>
                                <div class="flex space-x-2">
                                    if payment.status == PaymentStatus::Pending && payment.violation_id.is_some() {
                                        <button
                                            onclick={{
                                                let pay_from_wallet = pay_from_wallet.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    pay_from_wallet(payment_id);
                                                })
                                            }}
                                            disabled={busy}
                                            class="px-3 py-1.5 rounded-md bg-neutral-900 dark:bg-white text-white dark:text-neutral-900 text-sm font-medium disabled:opacity-50"
                                        >
                                            {"Pay from wallet"}
                                        </button>
                                    }
                                    if payment.status == PaymentStatus::Completed {
                                        <button
                                            onclick={{
                                                let show_receipt = show_receipt.clone();
                                                Callback::from(move |_: MouseEvent| {
                                                    show_receipt(payment_id);
                                                })
                                            }}
                                            class="px-3 py-1.5 rounded-md border border-neutral-300 dark:border-neutral-700 text-sm"
                                        >
                                            {"Receipt"}
                                        </button>
                                    }
                                </div>
                            </div>
                        }
                    })}
                </div>
            })}
        </div>
    }
}
