use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublisherAddress(String);

impl PublisherAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublisherCity(String);

impl PublisherCity {
    pub fn new(city: impl Into<String>) -> Self {
        Self(city.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublisherState(String);

impl PublisherState {
    pub fn new(state: impl Into<String>) -> Self {
        Self(state.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PublisherZipCode(String);

impl PublisherZipCode {
    pub fn new(zip_code: impl Into<String>) -> Self {
        Self(zip_code.into())
    }
}
