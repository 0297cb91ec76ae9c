//! Static configuration of every process stage.
//!
//! The screens are identical except for what this table captures:
//! endpoints, rounding rule, whether the stage consumes placas and
//! whether it feeds one or two destination queues.

use contracts::shared::consumo::Rounding;

/// One submission destination of a stage (Encolado has two machines,
/// every other stage one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destino {
    pub nombre: &'static str,
    pub update_path: &'static str,
    /// Endpoint that returns rows already queued for this destination,
    /// used to preload the queue on mount
    pub cola_path: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcesoStage {
    pub slug: &'static str,
    pub titulo: &'static str,
    pub pendientes_path: &'static str,
    pub destinos: &'static [Destino],
    pub rounding: Rounding,
    /// Whether confirming an item deducts placas from the inventory cache
    pub consume_placas: bool,
    /// Whether the modal offers the "sin consumo de placas" checkbox
    pub permite_sin_consumo: bool,
}

impl ProcesoStage {
    pub fn dual_destino(&self) -> bool {
        self.destinos.len() > 1
    }
}

pub const ENCOLADO: ProcesoStage = ProcesoStage {
    slug: "encolado",
    titulo: "Encolado",
    pendientes_path: "/procesos/pendientes-encolado",
    destinos: &[
        Destino {
            nombre: "Encolado 1",
            update_path: "/app/update-encolado",
            cola_path: Some("/app/encolado"),
        },
        Destino {
            nombre: "Encolado 2",
            update_path: "/app/update-encolado2",
            cola_path: Some("/app/encolado2"),
        },
    ],
    rounding: Rounding::CeilUnits,
    consume_placas: true,
    permite_sin_consumo: true,
};

pub const TROZADO: ProcesoStage = ProcesoStage {
    slug: "trozado",
    titulo: "Trozado",
    pendientes_path: "/procesos/pendientes-trozado",
    destinos: &[Destino {
        nombre: "Trozado",
        update_path: "/app/update-trozado",
        cola_path: None,
    }],
    rounding: Rounding::TwoDecimals,
    consume_placas: true,
    permite_sin_consumo: false,
};

pub const PEGADO: ProcesoStage = ProcesoStage {
    slug: "pegado",
    titulo: "Pegado",
    pendientes_path: "/procesos/pendientes-calado",
    destinos: &[Destino {
        nombre: "Pegado",
        update_path: "/app/update-calado",
        cola_path: Some("/app/calado"),
    }],
    rounding: Rounding::CeilUnits,
    consume_placas: true,
    permite_sin_consumo: true,
};

// The live backend really does spell this endpoint "trquelado".
pub const TROQUELADO: ProcesoStage = ProcesoStage {
    slug: "troquelado",
    titulo: "Troquelado",
    pendientes_path: "/procesos/pendientes-troquel",
    destinos: &[Destino {
        nombre: "Troquelado",
        update_path: "/app/update-trquelado",
        cola_path: None,
    }],
    rounding: Rounding::CeilUnits,
    consume_placas: false,
    permite_sin_consumo: false,
};

pub const MULTIPLE: ProcesoStage = ProcesoStage {
    slug: "multiple",
    titulo: "Múltiple",
    pendientes_path: "/procesos/pendientes-multiple",
    destinos: &[Destino {
        nombre: "Múltiple",
        update_path: "/app/update-multiple",
        cola_path: None,
    }],
    rounding: Rounding::TwoDecimals,
    consume_placas: true,
    permite_sin_consumo: false,
};

pub const EMPLACADO: ProcesoStage = ProcesoStage {
    slug: "emplacado",
    titulo: "Emplacado",
    pendientes_path: "/procesos/pendientes-emplacado",
    destinos: &[Destino {
        nombre: "Emplacado",
        update_path: "/app/update-emplacado",
        cola_path: None,
    }],
    rounding: Rounding::TwoDecimals,
    consume_placas: true,
    permite_sin_consumo: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_with_server_side_queues_preload_them() {
        // Encolado and Pegado keep their queues server-side between
        // sessions; the screen must pick up rows queued earlier.
        for destino in ENCOLADO.destinos {
            assert!(destino.cola_path.is_some());
        }
        assert_eq!(PEGADO.destinos[0].cola_path, Some("/app/calado"));
    }
}
