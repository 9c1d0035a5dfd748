mod builtin_deck;
mod reload;
mod wheel;
