pub mod auction;
pub mod bid;
pub mod card;
pub mod deck;
pub mod hand;
pub mod player;
pub mod rank;
pub mod score;
pub mod suit;
pub mod talon;
pub mod trick;
