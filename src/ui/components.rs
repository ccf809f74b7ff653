/// Reusable UI components

use yew::prelude::*;

use crate::account::{Account, AccountStatus, TaskStats};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub stats: TaskStats,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let stats = &props.stats;
    let cell = |label: &'static str, value: u32, class: &'static str| {
        html! {
            <div class="stat-cell">
                <span class={classes!("stat-label", class)}>{label}</span>
                <span class={classes!("stat-value", class)}>{value}</span>
            </div>
        }
    };

    html! {
        <div class="stats-bar">
            {cell("TOTAL", stats.total, "")}
            {cell("DONE", stats.success, "stat-success")}
            {cell("SKIP", stats.skipped, "")}
            {cell("FAIL", stats.failed, "stat-failed")}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: AccountStatus,
}

#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    match props.status {
        AccountStatus::Pending => html! {},
        AccountStatus::Processing => html! { <div class="row-spinner"></div> },
        AccountStatus::Success => html! { <span class="badge-success">{"✅"}</span> },
        AccountStatus::Failed => html! { <span class="badge badge-failed">{"Error"}</span> },
        AccountStatus::Skipped => html! { <span class="badge badge-skipped">{"Skip"}</span> },
        AccountStatus::Resting => html! { <span class="badge badge-resting">{"Rest"}</span> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountRowProps {
    pub account: Account,
    pub is_current: bool,
    #[prop_or(false)]
    pub disabled: bool,
    pub on_toggle: Callback<String>,
}

#[function_component(AccountRow)]
pub fn account_row(props: &AccountRowProps) -> Html {
    let account = &props.account;

    let onchange = props.on_toggle.reform({
        let id = account.id.clone();
        move |_: Event| id.clone()
    });

    html! {
        <li class={classes!("account-row", props.is_current.then_some("account-row-current"))}>
            <input
                type="checkbox"
                class="row-checkbox"
                checked={account.selected}
                disabled={props.disabled}
                {onchange}
            />

            <div class="avatar">
                if let Some(src) = &account.avatar {
                    <img src={src.clone()} alt="" class="avatar-img" />
                } else {
                    <div class="avatar-placeholder">{"𝕏"}</div>
                }
            </div>

            <div class="account-text">
                <a class="account-handle" href={account.url.clone()} target="_blank">
                    {format!("@{}", account.username)}
                </a>
                if let Some(error) = &account.error {
                    <p class="account-error">{error}</p>
                }
            </div>

            <div class="account-status">
                <StatusBadge status={account.status} />
            </div>
        </li>
    }
}
