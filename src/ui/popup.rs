/// Popup UI for Follower Pro

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use patternfly_yew::prelude::*;
use crate::config::{ENVIRONMENT_NOTICE, Settings, SpeedMode};
use crate::messages::OutboundMessage;
use crate::state::{PopupAction, PopupState};
use crate::ui::bridge::{self, MessageSubscription};
use crate::ui::components::{AccountRow, StatsBar};

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(PopupState::new);
    let settings = use_state(Settings::default);
    let bridge_available = *use_memo((), |_| bridge::is_available());

    // Load persisted state and subscribe to runner events while mounted
    {
        let dispatcher = state.dispatcher();
        let settings = settings.clone();

        use_effect_with(bridge_available, move |available| {
            let subscription = if *available {
                let restore = dispatcher.clone();
                spawn_local(async move {
                    match bridge::load_task_state().await {
                        Ok(Some(record)) => restore.dispatch(PopupAction::Restore(record)),
                        Ok(None) => log::debug!("no persisted task state"),
                        Err(e) => log::warn!("Failed to load task state: {}", e),
                    }
                    match bridge::load_settings().await {
                        Ok(loaded) => settings.set(loaded),
                        Err(e) => log::warn!("Failed to load settings: {}", e),
                    }
                });

                Some(MessageSubscription::register(move |message| {
                    if let Some(action) = PopupAction::from_inbound(message) {
                        dispatcher.dispatch(action);
                    }
                }))
            } else {
                None
            };

            move || drop(subscription)
        });
    }

    // Scan page handler
    let on_scan = {
        let dispatcher = state.dispatcher();

        Callback::from(move |_: MouseEvent| {
            if !bridge_available {
                return;
            }

            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = bridge::run_extractor().await;
                match &result {
                    Ok(accounts) => log::info!("Scan found {} accounts", accounts.len()),
                    Err(e) => log::warn!("Scan failed: {}", e),
                }

                if let Some(action) = PopupAction::from_scan(result) {
                    dispatcher.dispatch(action);
                }
            });
        })
    };

    let on_toggle_all = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: Event| dispatcher.dispatch(PopupAction::ToggleAll))
    };

    let on_toggle_account = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: String| dispatcher.dispatch(PopupAction::ToggleAccount(id)))
    };

    // Start run handler
    let on_start = {
        let state = state.clone();
        let speed = settings.speed_mode;

        Callback::from(move |_: MouseEvent| {
            let Some(accounts) = state.start_batch(bridge_available) else {
                return;
            };

            log::info!("Starting run for {} accounts", accounts.len());
            state.dispatch(PopupAction::RunStarted);

            spawn_local(async move {
                let message = OutboundMessage::StartTask { accounts, speed };
                if let Err(e) = bridge::send_message(&message).await {
                    log::warn!("Failed to send START_TASK: {}", e);
                }
            });
        })
    };

    // Stop run handler
    let on_stop = {
        let dispatcher = state.dispatcher();

        Callback::from(move |_: MouseEvent| {
            if bridge_available {
                spawn_local(async move {
                    if let Err(e) = bridge::send_message(&OutboundMessage::StopTask).await {
                        log::warn!("Failed to send STOP_TASK: {}", e);
                    }
                });
            }
            log::info!("Run stopped");
            dispatcher.dispatch(PopupAction::RunStopped);
        })
    };

    let on_speed_change = {
        let settings = settings.clone();

        Callback::from(move |e: Event| {
            let Some(select) = e.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let Some(speed_mode) = SpeedMode::parse(&select.value()) else {
                return;
            };

            let updated = Settings { speed_mode };
            settings.set(updated.clone());

            if bridge_available {
                spawn_local(async move {
                    if let Err(e) = bridge::save_settings(&updated).await {
                        log::warn!("Failed to save settings: {}", e);
                    }
                });
            }
        })
    };

    let selected_count = state.selected_count();
    let is_processing = state.is_processing;

    html! {
        <div class="popup">
            <header class="popup-header">
                <div class="brand">
                    <div class="brand-logo">{"𝕏"}</div>
                    <h1 class="popup-title">{"Follower Pro"}</h1>
                </div>
                if state.has_scanned {
                    <Button onclick={on_scan.clone()} disabled={is_processing} variant={ButtonVariant::Link}>
                        {"Rescan"}
                    </Button>
                }
            </header>

            <main class="popup-main">
                if !bridge_available {
                    <Alert r#type={AlertType::Warning} title={"Environment Notice"} inline={true}>
                        {ENVIRONMENT_NOTICE}
                    </Alert>
                }

                if let Some(error) = state.error_msg.clone() {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={error} inline={true}>
                        </Alert>
                    </div>
                }

                if !state.has_scanned {
                    <div class="empty-state">
                        <h2 class="empty-state-title">{"Build your network"}</h2>
                        <p class="empty-state-hint">
                            {"Scan any page to find X profiles. We'll extract them automatically for bulk following."}
                        </p>
                        <Button onclick={on_scan} variant={ButtonVariant::Primary} block={true}>
                            {"Scan Current Page"}
                        </Button>
                    </div>
                } else {
                    if state.shows_stats() {
                        <StatsBar stats={state.stats.clone()} />
                    }

                    if is_processing {
                        <div class="progress-row">
                            <Progress value={state.stats.progress_percent() as f64} />
                        </div>
                        if state.stats.is_resting() {
                            <Alert r#type={AlertType::Info} title={"Resting to avoid rate limits..."} inline={true}>
                            </Alert>
                        }
                    }

                    <div class="selection-bar">
                        <label class="select-all">
                            <input
                                type="checkbox"
                                checked={state.all_selected()}
                                disabled={is_processing}
                                onchange={on_toggle_all}
                            />
                            <span>{"Select All"}</span>
                        </label>
                        <span class="selected-count">{format!("{} selected", selected_count)}</span>
                    </div>

                    <ul class="account-list">
                        if state.accounts.is_empty() {
                            <div class="empty-list">
                                <p>{"No profiles found."}</p>
                            </div>
                        } else {
                            {for state.accounts.iter().enumerate().map(|(index, account)| html! {
                                <AccountRow
                                    key={account.id.clone()}
                                    account={account.clone()}
                                    is_current={state.is_current(index)}
                                    disabled={is_processing}
                                    on_toggle={on_toggle_account.clone()}
                                />
                            })}
                        }
                    </ul>
                }
            </main>

            if state.has_scanned {
                <footer class="popup-footer">
                    <div class="speed-row">
                        <label for="speed-mode">{"Speed"}</label>
                        <select
                            id="speed-mode"
                            class="speed-select"
                            disabled={is_processing}
                            onchange={on_speed_change}
                        >
                            {for SpeedMode::ALL.iter().map(|mode| html! {
                                <option
                                    value={mode.as_str()}
                                    selected={*mode == settings.speed_mode}
                                >
                                    {mode.label()}
                                </option>
                            })}
                        </select>
                    </div>
                    if !is_processing {
                        <Button
                            onclick={on_start}
                            disabled={selected_count == 0}
                            variant={ButtonVariant::Primary}
                            block={true}
                        >
                            {format!("Follow Selected ({})", selected_count)}
                        </Button>
                    } else {
                        <Button onclick={on_stop} variant={ButtonVariant::Danger} block={true}>
                            {"Stop Process"}
                        </Button>
                    }
                </footer>
            }
        </div>
    }
}
