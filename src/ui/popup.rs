/// Popup UI: categories of the last resolved page

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use patternfly_yew::prelude::*;
use crate::browser::ChromeStorage;
use crate::classifier::Classifier;
use crate::config::Config;
use crate::storage::load_snapshot;
use crate::ui::components::{CategoryList, CategoryRow};
use crate::AppContext;

#[derive(Properties, Clone)]
pub struct AppProps {
    pub context: &'static AppContext,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.context, other.context)
    }
}

#[derive(Clone, PartialEq)]
enum PopupState {
    Loading,
    Ready(Vec<String>),
    Error(String),
}

/// Pair each category with its link and warning flag
pub fn category_rows(categories: &[String], classifier: &Classifier, config: &Config) -> Vec<CategoryRow> {
    categories
        .iter()
        .map(|name| CategoryRow {
            name: name.clone(),
            href: config.category_url(name),
            warning: classifier.is_problematic_category(name),
        })
        .collect()
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let state = use_state(|| PopupState::Loading);

    // Load the snapshot on mount
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_snapshot(&ChromeStorage).await {
                    Ok(categories) => {
                        log::debug!("Popup loaded {} categories", categories.len());
                        state.set(PopupState::Ready(categories));
                    }
                    Err(e) => {
                        log::error!("Failed to load current page: {}", e);
                        state.set(PopupState::Error(e.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let AppContext { config, classifier } = props.context;

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Wikipedia categories"}</h1>

            {match &*state {
                PopupState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                    </div>
                },
                PopupState::Error(err) => html! {
                    <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                        {err.clone()}
                    </Alert>
                },
                PopupState::Ready(categories) if categories.is_empty() => html! {
                    <p class="empty-state">{"No Wikipedia categories for this site."}</p>
                },
                PopupState::Ready(categories) => {
                    let flagged = classifier.flagged(categories);
                    let rows = category_rows(categories, classifier, config);

                    html! {
                        <>
                            if !flagged.is_empty() {
                                <Alert r#type={AlertType::Warning} title={format!("{} flagged categories", flagged.len())} inline={true}>
                                    {flagged.join(", ")}
                                </Alert>
                            }
                            <CategoryList rows={rows} />
                        </>
                    }
                }
            }}
        </div>
    }
}
