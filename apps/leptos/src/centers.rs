//! Donation centers list view and the donation request dialog.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::api;

/// One center as presented by the HTTP gateway, which base64-encodes
/// action hashes for JSON clients
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Center {
    pub center_hash: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub contact_number: String,
    pub total_donations: u32,
}

/// Gateway response envelope: `{ "success": true, "centers": [..] }`.
/// Only the payload is read; unknown fields are ignored.
#[derive(Clone, Debug, Deserialize)]
struct CentersResponse {
    centers: Vec<Center>,
}

#[derive(Serialize)]
struct DonationRequest {
    center_hash: String,
    date: String,
}

#[component]
pub fn CentersPage() -> impl IntoView {
    let centers = RwSignal::new(Option::<Result<Vec<Center>, String>>::None);
    let selected = RwSignal::new(Option::<Center>::None);

    leptos::task::spawn_local(async move {
        let result = api::get_json::<CentersResponse>("/donation/centers")
            .await
            .map(|r| r.centers);
        centers.set(Some(result));
    });

    view! {
        <section class="centers">
            <h1>"Donation Centers"</h1>
            {move || match centers.get() {
                None => view! { <p class="spinner">"Loading…"</p> }.into_any(),
                Some(Err(err)) => view! { <p class="error">{err}</p> }.into_any(),
                Some(Ok(list)) => view! {
                    <div class="center-grid">
                        {list
                            .into_iter()
                            .map(|center| view! { <CenterCard center selected/> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
            <DonationRequestForm selected/>
        </section>
    }
}

#[component]
fn CenterCard(center: Center, selected: RwSignal<Option<Center>>) -> impl IntoView {
    let chosen = center.clone();
    view! {
        <article class="center-card" on:click=move |_| selected.set(Some(chosen.clone()))>
            <h2>{center.name.clone()}</h2>
            <p class="city">{center.city.clone()}</p>
            <p class="address">{center.address.clone()}</p>
            <p class="contact">{center.contact_number.clone()}</p>
            <p class="stat">{center.total_donations} " donations"</p>
        </article>
    }
}

/// Modal form posting a donation request for the selected center
#[component]
fn DonationRequestForm(selected: RwSignal<Option<Center>>) -> impl IntoView {
    let date = RwSignal::new(String::new());
    let status = RwSignal::new(Option::<Result<String, String>>::None);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(center) = selected.get_untracked() else {
            return;
        };
        let body = DonationRequest {
            center_hash: center.center_hash,
            date: date.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            let result = api::post_json::<_, serde_json::Value>("/donation/donate", &body)
                .await
                .map(|_| "Donation registered".to_string());
            status.set(Some(result));
        });
    };

    let close = move |_| {
        selected.set(None);
        status.set(None);
        date.set(String::new());
    };

    move || {
        selected.get().map(|center| {
            view! {
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=submit>
                        <h2>"Donate at " {center.name.clone()}</h2>
                        <label>
                            "Donation date"
                            <input
                                type="date"
                                prop:value=move || date.get()
                                on:input=move |ev| date.set(event_target_value(&ev))
                            />
                        </label>
                        {move || {
                            status
                                .get()
                                .map(|result| match result {
                                    Ok(msg) => view! { <p class="success">{msg}</p> }.into_any(),
                                    Err(err) => view! { <p class="error">{err}</p> }.into_any(),
                                })
                        }}
                        <footer>
                            <button type="submit">"Donate"</button>
                            <button type="button" on:click=close>
                                "Close"
                            </button>
                        </footer>
                    </form>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centers_envelope_deserializes() {
        let payload = r#"{
            "success": true,
            "centers": [{
                "center_hash": "uhCkkWCsAgoKkkfwyJAglj30xX_GLLV-3BXuFy436a2SqpcEwyBzm",
                "name": "City Hospital",
                "city": "Colombo",
                "address": "1 Hospital Rd",
                "contact_number": "0112345678",
                "total_donations": 3,
                "donors": []
            }]
        }"#;

        let response: CentersResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.centers.len(), 1);
        assert_eq!(response.centers[0].name, "City Hospital");
        assert_eq!(response.centers[0].total_donations, 3);
    }

    #[test]
    fn test_donation_request_body_shape() {
        let body = DonationRequest {
            center_hash: "uhCkkWCsAgoKkkfwyJAglj30xX_GLLV-3BXuFy436a2SqpcEwyBzm".to_string(),
            date: "2025-06-01".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("center_hash").is_some());
        assert!(json.get("date").is_some());
    }
}
