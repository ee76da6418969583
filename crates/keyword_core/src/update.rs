use crate::interaction::{self, Search, Subscribe, EMAIL_REQUIRED_MESSAGE};
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TopicChanged(topic) => {
            state.set_topic(topic);
            Vec::new()
        }
        Msg::EmailChanged(email) => {
            state.set_email(email);
            Vec::new()
        }
        Msg::SearchClicked => {
            // The topic goes out as typed, empty included.
            let request_id = interaction::begin(&mut state);
            vec![Effect::Search {
                request_id,
                query: state.topic().to_owned(),
            }]
        }
        Msg::SubscribeClicked => {
            if state.email().is_empty() {
                interaction::reject(&mut state, EMAIL_REQUIRED_MESSAGE);
                Vec::new()
            } else {
                let request_id = interaction::begin(&mut state);
                vec![Effect::Subscribe {
                    request_id,
                    email: state.email().to_owned(),
                    topic: state.topic().to_owned(),
                }]
            }
        }
        Msg::SearchCompleted { outcome, .. } => {
            interaction::settle::<Search>(&mut state, outcome);
            Vec::new()
        }
        Msg::SubscribeCompleted { outcome, .. } => {
            interaction::settle::<Subscribe>(&mut state, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
