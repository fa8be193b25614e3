use studybuddy_entity::quiz::quiz::Provenance as ProvenanceModel;
use studybuddy_model::content::Provenance;

use crate::convert::{FromDbModel, IntoDbModel};

impl FromDbModel<ProvenanceModel> for Provenance {
    fn from_db_model(model: ProvenanceModel) -> Self {
        match model {
            ProvenanceModel::Pdf => Provenance::Pdf,
            ProvenanceModel::Manual => Provenance::Manual,
        }
    }
}

impl IntoDbModel<ProvenanceModel> for Provenance {
    fn into_db_model(self) -> ProvenanceModel {
        match self {
            Provenance::Pdf => ProvenanceModel::Pdf,
            Provenance::Manual => ProvenanceModel::Manual,
        }
    }
}
