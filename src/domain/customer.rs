use crate::api::hotel_dto::CustomerDto;
use crate::domain::id::CustomerId;

/// A guest registered with one hotel. Ids are scoped to that hotel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    pub fn from_dto(dto: CustomerDto) -> Self {
        Self { id: CustomerId::new(dto.customer_id), name: dto.customer_name }
    }

    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto { customer_id: self.id.value, customer_name: self.name.clone() }
    }
}
