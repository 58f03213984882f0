//! # Engine
//!
//! Wires every service to one store. Inbound adapters build an [`Engine`]
//! once and call the services directly.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::contracts::ContractService;
use crate::elements::ElementService;
use crate::store::InMemoryStore;
use crate::templates::TemplateComposer;

pub struct Engine {
    pub elements: ElementService,
    pub templates: TemplateComposer,
    pub contracts: ContractService,
}

impl Engine {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<InMemoryStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            elements: ElementService::new(store.clone()),
            templates: TemplateComposer::new(store.clone(), store.clone(), clock.clone()),
            contracts: ContractService::new(
                store.clone(),
                store.clone(),
                store.clone(),
                store,
                clock,
            ),
        }
    }
}
