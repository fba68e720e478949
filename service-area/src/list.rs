//! Card grid of the ZIP codes one contractor serves. No projection involved.

use tracing::{debug, warn};

use crate::errors::{MapError, Result};
use crate::source::ServiceAreaSource;
use crate::types::{ContractorId, ServiceArea, ZipPoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCard {
    pub zip_code: String,
    pub city: String,
    pub distance: String,
}

impl From<&ZipPoint> for ZipCard {
    fn from(zip: &ZipPoint) -> Self {
        Self {
            zip_code: zip.zip_code.clone(),
            city: zip.city.clone(),
            distance: zip.distance_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Uninitialized,
    Ready,
    Failed(MapError),
}

pub type ZipClickHandler = Box<dyn FnMut(&str)>;

pub struct ServiceAreaList<S> {
    source: S,
    contractor_id: ContractorId,
    company_name: Option<String>,
    cards: Vec<ZipCard>,
    state: ListState,
    on_zip_code_click: ZipClickHandler,
}

impl<S: ServiceAreaSource> ServiceAreaList<S> {
    pub fn new(source: S, contractor_id: ContractorId, on_zip_code_click: ZipClickHandler) -> Self {
        Self {
            source,
            contractor_id,
            company_name: None,
            cards: Vec::new(),
            state: ListState::Uninitialized,
            on_zip_code_click,
        }
    }

    /// Fetches the contractor and rebuilds the cards in the order received.
    pub fn load(&mut self) -> &ListState {
        match self.fetch() {
            Ok(area) => {
                self.cards = area.service_zip_codes.iter().map(ZipCard::from).collect();
                self.company_name = Some(area.company_name);
                self.state = ListState::Ready;
                debug!(
                    "Loaded {} ZIP codes for contractor {}",
                    self.cards.len(),
                    self.contractor_id
                );
            }
            Err(err) => {
                warn!("Failed to load ZIP codes for contractor {}: {}", self.contractor_id, err);
                self.cards.clear();
                self.company_name = None;
                self.state = ListState::Failed(err);
            }
        }
        &self.state
    }

    fn fetch(&self) -> Result<ServiceArea> {
        self.source.fetch_contractor(self.contractor_id)
    }

    pub fn set_contractor(&mut self, contractor_id: ContractorId) -> &ListState {
        self.contractor_id = contractor_id;
        self.load()
    }

    /// Forwards a click on a card to the host. Returns false if no card
    /// carries `zip_code`.
    pub fn click(&mut self, zip_code: &str) -> bool {
        if !self.cards.iter().any(|card| card.zip_code == zip_code) {
            return false;
        }
        (self.on_zip_code_click)(zip_code);
        true
    }

    pub fn cards(&self) -> &[ZipCard] {
        &self.cards
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    pub fn contractor_id(&self) -> ContractorId {
        self.contractor_id
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Text to show instead of the grid, if any.
    pub fn message(&self) -> Option<String> {
        match &self.state {
            ListState::Uninitialized => Some("Loading service area...".to_string()),
            ListState::Failed(err) => Some(err.to_string()),
            ListState::Ready if self.cards.is_empty() => {
                Some("No ZIP codes in this service area".to_string())
            }
            ListState::Ready => None,
        }
    }
}
