mod audit;
mod nop;
