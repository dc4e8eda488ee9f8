//! Every function here is pure. Encoders mask each field to its declared width
//! before packing; out-of-width bits are dropped silently.

mod atten;
mod counter;
mod dna;
mod scaler;
mod status;
mod threshold;

pub use atten::{decode_attenuators, encode_attenuators, ATTENUATORS_PER_REGISTER};
pub use counter::{decode_counter, decode_deadtime, decode_latched_timestamp, decode_trigger_time};
pub use dna::decode_dna;
pub use scaler::{decode_scaler_pair, ScalerPair, SCALER_MASK};
pub use status::{
    decode_data_valid, decode_firmware_date, decode_firmware_version, decode_trigger_info,
    encode_ext_trigger_config, TriggerInfo,
};
pub use threshold::{decode_threshold, encode_threshold, THRESHOLD_MASK};
