pub mod ticket_issuance;
