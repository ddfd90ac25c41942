use api::ConversionClient;
use dioxus::prelude::*;

use crate::converter_state::perform_conversion;
use crate::converter_state::ConverterState;
use crate::converter_state::FieldEdit;

#[derive(Clone, Copy, PartialEq)]
pub struct Converter {
    state: Signal<ConverterState>,
}

impl Converter {
    pub fn new(state: Signal<ConverterState>) -> Self {
        Self { state }
    }

    /// Returns the signal holding the form state.
    /// Call .read() on this in a component to subscribe to changes.
    pub fn state(&self) -> Signal<ConverterState> {
        self.state
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        self.state.write().edit(edit);
    }

    /// Starts a submission and settles it on the component's task when the
    /// client answers. Earlier submissions still in flight become stale.
    pub fn submit<C>(&mut self, client: C)
    where
        C: ConversionClient + 'static,
    {
        let pending = self.state.write().submit();
        dioxus_logger::tracing::info!(
            "converting {} {} to {} (#{})",
            pending.request.amount,
            pending.request.from,
            pending.request.to,
            pending.generation
        );

        let mut state = self.state;
        spawn(async move {
            let settlement = perform_conversion(&client, pending).await;
            state.write().settle(settlement);
        });
    }
}

pub fn use_converter() -> Converter {
    Converter::new(use_signal(ConverterState::default))
}
