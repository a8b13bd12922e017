//! Demo binary: seeds the sample records and walks through listing,
//! filtering, the order status actions and a cascading delete.

use gestion_servicios::auth::{Caller, SessionAuthenticator};
use gestion_servicios::config::Settings;
use gestion_servicios::controller::CrudController;
use gestion_servicios::lifecycle::{setup_tracing, ServiceSystem};
use gestion_servicios::model::{
    EmpresaCreate, Estado, OrdenServicioCreate, OrdenServicioFilter, Prioridad,
    ProfesionalCreate, ServicioCreate, ServicioFilter,
};
use std::collections::BTreeSet;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::load()?;
    setup_tracing(&settings);

    info!("Starting service management demo");

    let system = ServiceSystem::new(&settings, Arc::new(SessionAuthenticator));
    let admin = Caller::user("admin");

    // Seed the sample data
    let span = tracing::info_span!("seed");
    let (empresa, orden) = async {
        let empresa = system
            .empresas
            .create(
                EmpresaCreate {
                    giro: Some("Comercio al por menor".into()),
                    telefono: Some("+56912345678".into()),
                    email: Some("contacto@pymeejemplo.cl".into()),
                    direccion: Some("Av. Principal 123".into()),
                    comuna: Some("Santiago".into()),
                    ..EmpresaCreate::new("76.123.456-7", "PYME Ejemplo S.A.")
                },
                &admin,
            )
            .await?;
        info!(%empresa, "Empresa created");

        let diagnostico = system
            .servicios
            .create(
                ServicioCreate {
                    descripcion: Some("Evaluación de infraestructura tecnológica actual".into()),
                    categoria: Some("consultoria".into()),
                    duracion_estimada_horas: 40,
                    ..ServicioCreate::new("Diagnóstico tecnológico")
                },
                &admin,
            )
            .await?;
        let prototipo = system
            .servicios
            .create(
                ServicioCreate {
                    descripcion: Some("Creación de prototipo funcional MVP".into()),
                    categoria: Some("desarrollo".into()),
                    duracion_estimada_horas: 120,
                    ..ServicioCreate::new("Desarrollo de prototipo")
                },
                &admin,
            )
            .await?;
        info!(%diagnostico, %prototipo, "Servicios created");

        let profesional = system
            .profesionales
            .create(
                ProfesionalCreate {
                    especialidad: Some("Desarrollo de Software".into()),
                    email: Some("jgonzalez@inacap.cl".into()),
                    ..ProfesionalCreate::new("12.345.678-9", "Juan Carlos", "González Pérez")
                },
                &admin,
            )
            .await?;
        info!(%profesional, "Profesional created");

        let orden = system
            .ordenes
            .create(
                OrdenServicioCreate {
                    estado: Estado::Nueva,
                    prioridad: Prioridad::Media,
                    descripcion_requerimiento: Some("Modernización de sistemas legacy".into()),
                    servicios_seleccionados: BTreeSet::from([diagnostico.id, prototipo.id]),
                    profesional_asignado: Some(profesional.id),
                    ..OrdenServicioCreate::new(empresa.id)
                },
                &admin,
            )
            .await?;
        let descripcion = system.ordenes.describe(orden.id).await?;
        info!(orden = %descripcion, "Orden created");

        Ok::<_, Box<dyn Error>>((empresa, orden))
    }
    .instrument(span)
    .await?;

    // Public reads and filters
    let consultoria = system
        .servicios
        .list(ServicioFilter {
            categoria: Some("Consultoria".into()),
            ..Default::default()
        })
        .await?;
    info!(count = consultoria.len(), "Servicios in 'consultoria'");

    let nuevas = system
        .ordenes
        .list(OrdenServicioFilter {
            estado: Some("nueva".into()),
            q: Some("gonzález".into()),
            ..Default::default()
        })
        .await?;
    info!(count = nuevas.len(), "New orders assigned to González");

    // Anonymous callers may read but not write
    if let Err(e) = system
        .servicios
        .create(ServicioCreate::new("Soporte"), &Caller::Anonymous)
        .await
    {
        warn!(error = %e, "Anonymous create rejected");
    }

    // Status actions
    let span = tracing::info_span!("acciones");
    async {
        system.ordenes.marcar_en_ejecucion(&[orden.id], &admin).await?;
        system.ordenes.marcar_finalizada(&[orden.id], &admin).await?;
        let descripcion = system.ordenes.describe(orden.id).await?;
        info!(orden = %descripcion, "Orden finalized");
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    // Deleting the company takes its orders with it
    let antes = system.empresas.ordenes(empresa.id).await?.len();
    system.empresas.delete(empresa.id, &admin).await?;
    info!(cascaded = antes, "Empresa deleted");

    let db = system.shutdown().await?;
    info!(
        empresas = db.empresas.len(),
        servicios = db.servicios.len(),
        profesionales = db.profesionales.len(),
        ordenes = db.ordenes.len(),
        "Demo completed successfully"
    );
    Ok(())
}
