use netsight_core::SimulationParameters;
use netsight_core::model::ParameterField;

use crate::util::format::format_parameter;

/// One editable row of the parameter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterRow {
    NetworkType,
    Modulation,
    ChannelCoding,
    Bandwidth,
    Distance,
    NoiseLevel,
}

impl ParameterRow {
    pub const ALL: [ParameterRow; 6] = [
        ParameterRow::NetworkType,
        ParameterRow::Modulation,
        ParameterRow::ChannelCoding,
        ParameterRow::Bandwidth,
        ParameterRow::Distance,
        ParameterRow::NoiseLevel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ParameterRow::NetworkType => "Network",
            ParameterRow::Modulation => "Modulation",
            ParameterRow::ChannelCoding => "Coding",
            ParameterRow::Bandwidth => ParameterField::Bandwidth.label(),
            ParameterRow::Distance => ParameterField::Distance.label(),
            ParameterRow::NoiseLevel => ParameterField::NoiseLevel.label(),
        }
    }

    /// The numeric field behind this row, if any
    pub fn field(&self) -> Option<ParameterField> {
        match self {
            ParameterRow::Bandwidth => Some(ParameterField::Bandwidth),
            ParameterRow::Distance => Some(ParameterField::Distance),
            ParameterRow::NoiseLevel => Some(ParameterField::NoiseLevel),
            _ => None,
        }
    }

    pub fn display_value(&self, params: &SimulationParameters) -> String {
        match self {
            ParameterRow::NetworkType => params.network_type.to_string(),
            ParameterRow::Modulation => params.modulation.to_string(),
            ParameterRow::ChannelCoding => params.channel_coding.to_string(),
            _ => match self.field() {
                Some(field) => format_parameter(field, params.get(field)),
                None => String::new(),
            },
        }
    }
}
