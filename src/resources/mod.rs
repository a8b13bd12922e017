//! Per-record rules: cleaning, validation, delete policies, filters and
//! ordering, expressed as [`Entity`](crate::framework::Entity) implementations.
//!
//! | Record | Unique | Delete policy |
//! |---|---|---|
//! | [`Empresa`](crate::model::Empresa) | `rut` | cascade to owned orders |
//! | [`Servicio`](crate::model::Servicio) | `nombre` | detach from orders |
//! | [`Profesional`](crate::model::Profesional) | `run` | unassign from orders |
//! | [`OrdenServicio`](crate::model::OrdenServicio) | - | - |

pub mod actions;
pub mod empresa;
pub mod fields;
pub mod orden;
pub mod profesional;
pub mod servicio;

pub use actions::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use crate::error::RecordError;
    use crate::model::*;
    use rstest::rstest;
    use std::collections::BTreeSet;

    fn empresa(db: &mut Database, rut: &str, razon_social: &str) -> Empresa {
        db.create::<Empresa>(EmpresaCreate::new(rut, razon_social))
            .unwrap()
    }

    fn servicio(db: &mut Database, nombre: &str) -> Servicio {
        db.create::<Servicio>(ServicioCreate::new(nombre)).unwrap()
    }

    fn profesional(db: &mut Database, run: &str, nombres: &str, apellidos: &str) -> Profesional {
        db.create::<Profesional>(ProfesionalCreate::new(run, nombres, apellidos))
            .unwrap()
    }

    fn orden(db: &mut Database, empresa: EmpresaId) -> OrdenServicio {
        db.create::<OrdenServicio>(OrdenServicioCreate::new(empresa))
            .unwrap()
    }

    fn validation_field<T: std::fmt::Debug>(result: Result<T, RecordError>) -> &'static str {
        match result {
            Err(RecordError::Validation(e)) => e.field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_rut_is_rejected() {
        let mut db = Database::new();
        empresa(&mut db, "76.123.456-7", "PYME Ejemplo S.A.");

        let result = db.create::<Empresa>(EmpresaCreate::new("76.123.456-7", "Otra S.A."));
        assert_eq!(validation_field(result), "rut");
        assert_eq!(db.empresas.len(), 1);
    }

    #[test]
    fn test_duplicate_detected_after_trimming() {
        let mut db = Database::new();
        empresa(&mut db, "76.123.456-7", "PYME Ejemplo S.A.");

        let result = db.create::<Empresa>(EmpresaCreate::new(" 76.123.456-7 ", "Otra S.A."));
        assert_eq!(validation_field(result), "rut");
    }

    #[test]
    fn test_update_keeping_own_rut_is_not_a_duplicate() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME Ejemplo S.A.");

        let update = EmpresaUpdate {
            rut: Some("76.123.456-7".into()),
            comuna: Some("Santiago".into()),
            ..Default::default()
        };
        let updated = db.update::<Empresa>(e.id, update).unwrap();
        assert_eq!(updated.comuna.as_deref(), Some("Santiago"));
    }

    #[test]
    fn test_update_to_taken_rut_leaves_record_unchanged() {
        let mut db = Database::new();
        empresa(&mut db, "11.111.111-1", "Uno");
        let dos = empresa(&mut db, "22.222.222-2", "Dos");

        let update = EmpresaUpdate {
            rut: Some("11.111.111-1".into()),
            razon_social: Some("Dos Renombrada".into()),
            ..Default::default()
        };
        assert_eq!(validation_field(db.update::<Empresa>(dos.id, update)), "rut");
        assert_eq!(db.get::<Empresa>(dos.id).unwrap(), dos);
    }

    #[test]
    fn test_blank_razon_social_is_rejected() {
        let mut db = Database::new();
        let result = db.create::<Empresa>(EmpresaCreate::new("76.123.456-7", "   "));
        assert_eq!(validation_field(result), "razon_social");
    }

    #[test]
    fn test_long_rut_is_rejected() {
        let mut db = Database::new();
        let result = db.create::<Empresa>(EmpresaCreate::new("76.123.456-7-X", "PYME"));
        assert_eq!(validation_field(result), "rut");
    }

    /// Creates one record with `value` in `field`, every other field valid.
    fn create_with(field: &str, value: String) -> Result<(), RecordError> {
        fn empresa(configure: fn(&mut EmpresaCreate, String), value: String) -> EmpresaCreate {
            let mut params = EmpresaCreate::new("76.123.456-7", "PYME Ejemplo S.A.");
            configure(&mut params, value);
            params
        }

        let mut db = Database::new();
        match field {
            "rut" => db.create::<Empresa>(EmpresaCreate::new(value, "PYME")).map(drop),
            "razon_social" => db
                .create::<Empresa>(EmpresaCreate::new("76.123.456-7", value))
                .map(drop),
            "giro" => db
                .create::<Empresa>(empresa(|p, v| p.giro = Some(v), value))
                .map(drop),
            "telefono" => db
                .create::<Empresa>(empresa(|p, v| p.telefono = Some(v), value))
                .map(drop),
            "direccion" => db
                .create::<Empresa>(empresa(|p, v| p.direccion = Some(v), value))
                .map(drop),
            "comuna" => db
                .create::<Empresa>(empresa(|p, v| p.comuna = Some(v), value))
                .map(drop),
            "nombre" => db.create::<Servicio>(ServicioCreate::new(value)).map(drop),
            "categoria" => db
                .create::<Servicio>(ServicioCreate {
                    categoria: Some(value),
                    ..ServicioCreate::new("Soporte")
                })
                .map(drop),
            "run" => db
                .create::<Profesional>(ProfesionalCreate::new(value, "Ana", "Rojas"))
                .map(drop),
            "nombres" => db
                .create::<Profesional>(ProfesionalCreate::new("12.345.678-9", value, "Rojas"))
                .map(drop),
            "apellidos" => db
                .create::<Profesional>(ProfesionalCreate::new("12.345.678-9", "Ana", value))
                .map(drop),
            "especialidad" => db
                .create::<Profesional>(ProfesionalCreate {
                    especialidad: Some(value),
                    ..ProfesionalCreate::new("12.345.678-9", "Ana", "Rojas")
                })
                .map(drop),
            other => panic!("no record has a length-limited field {other}"),
        }
    }

    #[rstest]
    #[case("rut", 12)]
    #[case("razon_social", 200)]
    #[case("giro", 200)]
    #[case("telefono", 50)]
    #[case("direccion", 250)]
    #[case("comuna", 100)]
    #[case("nombre", 150)]
    #[case("categoria", 100)]
    #[case("run", 12)]
    #[case("nombres", 100)]
    #[case("apellidos", 100)]
    #[case("especialidad", 100)]
    fn test_max_length_per_field(#[case] field: &'static str, #[case] max: usize) {
        // multi-byte characters: limits count characters, not bytes
        assert_eq!(create_with(field, "á".repeat(max)), Ok(()));
        assert_eq!(validation_field(create_with(field, "á".repeat(max + 1))), field);
    }

    #[test]
    fn test_servicio_update_applies_every_field() {
        let mut db = Database::new();
        let s = servicio(&mut db, "Soporte");

        let update = ServicioUpdate {
            nombre: Some(" Soporte remoto ".into()),
            descripcion: Some("Atención a distancia".into()),
            categoria: Some("   ".into()),
            duracion_estimada_horas: Some(4),
            activo: Some(false),
        };
        let updated = db.update::<Servicio>(s.id, update).unwrap();
        assert_eq!(updated.nombre, "Soporte remoto");
        assert_eq!(updated.descripcion.as_deref(), Some("Atención a distancia"));
        assert_eq!(updated.categoria, None);
        assert_eq!(updated.duracion_estimada_horas, 4);
        assert!(!updated.activo);
    }

    #[test]
    fn test_servicio_update_with_negative_duration_changes_nothing() {
        let mut db = Database::new();
        let s = servicio(&mut db, "Soporte");

        let update = ServicioUpdate {
            nombre: Some("Soporte remoto".into()),
            categoria: Some("TI".into()),
            duracion_estimada_horas: Some(-1),
            activo: Some(false),
            ..Default::default()
        };
        assert_eq!(
            validation_field(db.update::<Servicio>(s.id, update)),
            "duracion_estimada_horas"
        );
        assert_eq!(db.get::<Servicio>(s.id).unwrap(), s);
    }

    #[test]
    fn test_invalid_email_is_rejected_and_blank_email_is_absent() {
        let mut db = Database::new();
        let mut params = EmpresaCreate::new("76.123.456-7", "PYME");
        params.email = Some("contacto-en-pyme".into());
        assert_eq!(validation_field(db.create::<Empresa>(params)), "email");

        let mut params = ProfesionalCreate::new("12.345.678-9", "Juan Carlos", "González Pérez");
        params.email = Some("jgonzalez@".into());
        assert_eq!(validation_field(db.create::<Profesional>(params)), "email");

        let mut params = EmpresaCreate::new("76.123.456-7", "PYME");
        params.email = Some("  ".into());
        let created = db.create::<Empresa>(params).unwrap();
        assert_eq!(created.email, None);
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let mut db = Database::new();
        let mut params = ServicioCreate::new("Diagnóstico tecnológico");
        params.duracion_estimada_horas = -1;
        assert_eq!(
            validation_field(db.create::<Servicio>(params)),
            "duracion_estimada_horas"
        );

        let s = servicio(&mut db, "Diagnóstico tecnológico");
        assert_eq!(s.duracion_estimada_horas, 0);
        assert!(s.activo);
        let update = ServicioUpdate {
            duracion_estimada_horas: Some(-40),
            ..Default::default()
        };
        assert_eq!(
            validation_field(db.update::<Servicio>(s.id, update)),
            "duracion_estimada_horas"
        );
    }

    #[test]
    fn test_duplicate_servicio_nombre_and_profesional_run() {
        let mut db = Database::new();
        servicio(&mut db, "Desarrollo de prototipo");
        let result = db.create::<Servicio>(ServicioCreate::new("Desarrollo de prototipo"));
        assert_eq!(validation_field(result), "nombre");

        profesional(&mut db, "12.345.678-9", "Juan Carlos", "González Pérez");
        let result =
            db.create::<Profesional>(ProfesionalCreate::new("12.345.678-9", "Ana", "Rojas"));
        assert_eq!(validation_field(result), "run");
    }

    #[test]
    fn test_profesional_requires_names() {
        let mut db = Database::new();
        let result = db.create::<Profesional>(ProfesionalCreate::new("1-9", "", "Rojas"));
        assert_eq!(validation_field(result), "nombres");
        let result = db.create::<Profesional>(ProfesionalCreate::new("1-9", "Ana", " "));
        assert_eq!(validation_field(result), "apellidos");
    }

    #[test]
    fn test_orden_requires_existing_references() {
        let mut db = Database::new();
        let result = db.create::<OrdenServicio>(OrdenServicioCreate::new(EmpresaId(99)));
        assert_eq!(validation_field(result), "empresa");

        let e = empresa(&mut db, "76.123.456-7", "PYME Ejemplo S.A.");
        let mut params = OrdenServicioCreate::new(e.id);
        params.servicios_seleccionados = BTreeSet::from([ServicioId(7)]);
        assert_eq!(
            validation_field(db.create::<OrdenServicio>(params)),
            "servicios_seleccionados"
        );

        let mut params = OrdenServicioCreate::new(e.id);
        params.profesional_asignado = Some(ProfesionalId(3));
        assert_eq!(
            validation_field(db.create::<OrdenServicio>(params)),
            "profesional_asignado"
        );
        assert!(db.ordenes.is_empty());
    }

    #[test]
    fn test_failed_create_does_not_consume_an_id() {
        let mut db = Database::new();
        let _ = db.create::<Empresa>(EmpresaCreate::new("", "Sin RUT"));
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        assert_eq!(e.id, EmpresaId(1));
    }

    #[test]
    fn test_orden_defaults() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let o = orden(&mut db, e.id);
        assert_eq!(o.estado, Estado::Nueva);
        assert_eq!(o.prioridad, Prioridad::Media);
        assert!(o.servicios_seleccionados.is_empty());
        assert_eq!(o.profesional_asignado, None);
    }

    #[test]
    fn test_update_keeps_fecha_creacion() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let o = orden(&mut db, e.id);

        let update = OrdenServicioUpdate {
            estado: Some(Estado::Finalizada),
            ..Default::default()
        };
        let updated = db.update::<OrdenServicio>(o.id, update).unwrap();
        assert_eq!(updated.estado, Estado::Finalizada);
        assert_eq!(updated.fecha_creacion, o.fecha_creacion);
        assert_eq!(updated.empresa, o.empresa);
    }

    #[test]
    fn test_finalizing_without_technician_is_allowed() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let o = orden(&mut db, e.id);

        let cambio = db
            .perform::<OrdenServicio>(o.id, OrdenAction::MarcarFinalizada)
            .unwrap();
        assert_eq!(cambio.anterior, Estado::Nueva);
        assert_eq!(cambio.actual, Estado::Finalizada);
        assert_eq!(
            db.get::<OrdenServicio>(o.id).unwrap().estado,
            Estado::Finalizada
        );
    }

    #[test]
    fn test_delete_empresa_cascades_to_its_orders_only() {
        let mut db = Database::new();
        let a = empresa(&mut db, "11.111.111-1", "Alfa");
        let b = empresa(&mut db, "22.222.222-2", "Beta");
        for _ in 0..3 {
            orden(&mut db, a.id);
        }
        let kept = orden(&mut db, b.id);

        assert_eq!(db.delete::<Empresa>(a.id).unwrap(), 3);
        assert_eq!(db.ordenes.len(), 1);
        assert!(db.ordenes.contains(&kept.id));
        assert!(!db.empresas.contains(&a.id));
    }

    #[test]
    fn test_delete_profesional_unassigns_orders() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let p = profesional(&mut db, "12.345.678-9", "Juan Carlos", "González Pérez");
        let mut params = OrdenServicioCreate::new(e.id);
        params.profesional_asignado = Some(p.id);
        let o = db.create::<OrdenServicio>(params).unwrap();

        assert_eq!(db.delete::<Profesional>(p.id).unwrap(), 1);
        let o = db.get::<OrdenServicio>(o.id).unwrap();
        assert_eq!(o.profesional_asignado, None);
    }

    #[test]
    fn test_delete_servicio_detaches_it_from_orders() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let s1 = servicio(&mut db, "Diagnóstico tecnológico");
        let s2 = servicio(&mut db, "Desarrollo de prototipo");
        let mut params = OrdenServicioCreate::new(e.id);
        params.servicios_seleccionados = BTreeSet::from([s1.id, s2.id]);
        let o = db.create::<OrdenServicio>(params).unwrap();

        assert_eq!(db.delete::<Servicio>(s1.id).unwrap(), 1);
        let o = db.get::<OrdenServicio>(o.id).unwrap();
        assert_eq!(o.servicios_seleccionados, BTreeSet::from([s2.id]));
    }

    #[test]
    fn test_delete_missing_record_is_not_found() {
        let mut db = Database::new();
        let result = db.delete::<Servicio>(ServicioId(5));
        assert!(matches!(
            result,
            Err(RecordError::NotFound {
                entity: EntityKind::Servicio,
                ..
            })
        ));
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let mut db = Database::new();
        let first = empresa(&mut db, "11.111.111-1", "Alfa");
        db.delete::<Empresa>(first.id).unwrap();
        let second = empresa(&mut db, "22.222.222-2", "Beta");
        assert_eq!(second.id, EmpresaId(2));
    }

    #[test]
    fn test_list_empresa_q_matches_name_rut_or_email() {
        let mut db = Database::new();
        let mut params = EmpresaCreate::new("76.123.456-7", "PYME Ejemplo S.A.");
        params.email = Some("contacto@pymeejemplo.cl".into());
        db.create::<Empresa>(params).unwrap();
        empresa(&mut db, "99.888.777-6", "Constructora Andes");

        let by = |q: &str| {
            db.list::<Empresa>(&EmpresaFilter { q: Some(q.into()) })
                .into_iter()
                .map(|e| e.rut)
                .collect::<Vec<_>>()
        };
        assert_eq!(by("pyme"), vec!["76.123.456-7"]);
        assert_eq!(by("888"), vec!["99.888.777-6"]);
        assert_eq!(by("CONTACTO@"), vec!["76.123.456-7"]);
        assert_eq!(by("   ").len(), 2);
        assert!(by("inexistente").is_empty());
    }

    #[test]
    fn test_list_servicio_filters() {
        let mut db = Database::new();
        let mut params = ServicioCreate::new("Diagnóstico tecnológico");
        params.categoria = Some("consultoria".into());
        db.create::<Servicio>(params).unwrap();
        let mut params = ServicioCreate::new("Desarrollo de prototipo");
        params.categoria = Some("desarrollo".into());
        params.descripcion = Some("Creación de prototipo funcional MVP".into());
        params.activo = false;
        db.create::<Servicio>(params).unwrap();

        let nombres = |filter: ServicioFilter| {
            db.list::<Servicio>(&filter)
                .into_iter()
                .map(|s| s.nombre)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            nombres(ServicioFilter {
                q: Some("mvp".into()),
                ..Default::default()
            }),
            vec!["Desarrollo de prototipo"]
        );
        assert_eq!(
            nombres(ServicioFilter {
                categoria: Some("Consultoria".into()),
                ..Default::default()
            }),
            vec!["Diagnóstico tecnológico"]
        );
        assert_eq!(
            nombres(ServicioFilter {
                activo: Some(false),
                ..Default::default()
            }),
            vec!["Desarrollo de prototipo"]
        );
    }

    #[test]
    fn test_list_profesional_q() {
        let mut db = Database::new();
        profesional(&mut db, "12.345.678-9", "Juan Carlos", "González Pérez");
        profesional(&mut db, "9.876.543-2", "Ana", "Rojas");

        let filter = ProfesionalFilter {
            q: Some("gonzález".into()),
        };
        let found = db.list::<Profesional>(&filter);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].run, "12.345.678-9");
    }

    #[test]
    fn test_list_ordenes_newest_first() {
        let mut db = Database::new();
        let e = empresa(&mut db, "76.123.456-7", "PYME");
        let ids: Vec<_> = (0..3).map(|_| orden(&mut db, e.id).id).collect();

        let listed: Vec<_> = db
            .list::<OrdenServicio>(&OrdenServicioFilter::default())
            .into_iter()
            .map(|o| o.id)
            .collect();
        let mut expected = ids.clone();
        expected.reverse();
        assert_eq!(listed, expected);
    }

    #[test]
    fn test_list_ordenes_filters_combine_with_and() {
        let mut db = Database::new();
        let pyme = empresa(&mut db, "76.123.456-7", "PYME Ejemplo S.A.");
        let andes = empresa(&mut db, "99.888.777-6", "Constructora Andes");
        let juan = profesional(&mut db, "12.345.678-9", "Juan Carlos", "González Pérez");

        let mut params = OrdenServicioCreate::new(pyme.id);
        params.descripcion_requerimiento = Some("Diagnóstico de red".into());
        params.prioridad = Prioridad::Alta;
        let diag = db.create::<OrdenServicio>(params).unwrap();

        let mut params = OrdenServicioCreate::new(andes.id);
        params.profesional_asignado = Some(juan.id);
        params.estado = Estado::EnEjecucion;
        let asignada = db.create::<OrdenServicio>(params).unwrap();

        let plain = orden(&mut db, andes.id);

        let ids = |filter: OrdenServicioFilter| {
            db.list::<OrdenServicio>(&filter)
                .into_iter()
                .map(|o| o.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            ids(OrdenServicioFilter {
                q: Some("DIAGNÓSTICO".into()),
                ..Default::default()
            }),
            vec![diag.id]
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                q: Some("gonzález".into()),
                ..Default::default()
            }),
            vec![asignada.id]
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                q: Some("andes".into()),
                ..Default::default()
            }),
            vec![plain.id, asignada.id]
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                estado: Some("nueva".into()),
                ..Default::default()
            }),
            vec![plain.id, diag.id]
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                estado: Some("nueva".into()),
                empresa: Some("99.888".into()),
                ..Default::default()
            }),
            vec![plain.id]
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                prioridad: Some("alta".into()),
                q: Some("andes".into()),
                ..Default::default()
            }),
            Vec::<OrdenServicioId>::new()
        );
        assert_eq!(
            ids(OrdenServicioFilter {
                profesional_id: Some(juan.id),
                ..Default::default()
            }),
            vec![asignada.id]
        );
        // an unknown status code is ignored rather than matching nothing
        assert_eq!(
            ids(OrdenServicioFilter {
                estado: Some("pendiente".into()),
                ..Default::default()
            })
            .len(),
            3
        );
    }
}
