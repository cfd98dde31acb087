use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use bus_maintenance::config::EnvironmentConfig;
use bus_maintenance::routes::build_router;
use bus_maintenance::state::AppState;
use bus_maintenance::storage::{FleetStore, UserStore};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let config = EnvironmentConfig {
        environment: "development".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_expiration: 3600,
        cors_origins: Vec::new(),
    };

    let state = AppState::new(FleetStore::new(), UserStore::seed_demo()?, config);
    let app = build_router(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn login_token(c: &reqwest::Client, base_url: &str) -> anyhow::Result<String> {
    let res = c
        .post(format!("{}/api/auth/login", base_url))
        .json(&json!({"email": "admin@admin.com", "password": "passer123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let token = body["data"]["token"]
        .as_str()
        .ok_or_else(|| anyhow::anyhow!("login sin token"))?
        .to_string();
    Ok(token)
}

#[tokio::test]
async fn e2e_ping() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/ping", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_login_ok() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"email": "admin@admin.com", "password": "passer123"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Connexion réussie! Bienvenue Administrateur"
    );
    assert_eq!(body["data"]["token_type"], "Bearer");
    assert_eq!(body["data"]["user"]["email"], "admin@admin.com");
    assert!(body["data"]["user"].get("password_hash").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_login_password_incorrecto() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({"email": "admin@admin.com", "password": "mauvais"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Identifiants incorrects");
    Ok(())
}

#[tokio::test]
async fn e2e_login_campos_faltantes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .post(format!("{}/api/auth/login", app.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Les données fournies sont invalides.");
    assert!(body["errors"]["email"].is_array());
    assert!(body["errors"]["password"].is_array());
    Ok(())
}

#[tokio::test]
async fn e2e_rutas_protegidas_sin_token() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/buses/1/breakdowns", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Token d'autorisation requis");
    Ok(())
}

#[tokio::test]
async fn e2e_token_invalido() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api/buses/1/breakdowns", app.base_url))
        .header("Authorization", "Bearer no-es-un-jwt")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn e2e_crear_panne() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    // El bus_id del body se ignora: manda el del path
    let res = c
        .post(format!("{}/api/buses/7/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "bus_id": 999,
            "date_panne": "2025-03-10",
            "description_probleme": "Surchauffe moteur",
            "diagnostic_mecanicien": "Radiateur percé",
            "reparation_effectuee": "Remplacement du radiateur",
            "statut_reparation": "terminee",
            "kilometrage": 152000,
            "piece_remplacee": "Radiateur",
            "prix_piece": 450000.0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["bus_id"], 7);
    assert_eq!(body["created_by"], 1);
    assert_eq!(body["statut_reparation"], "terminee");
    assert_eq!(body["prix_piece"], 450000.0);
    Ok(())
}

#[tokio::test]
async fn e2e_crear_panne_campos_faltantes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/1/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({"kilometrage": 1000}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    // Todos los campos requeridos se reportan a la vez
    assert_eq!(
        body["errors"]["date_panne"][0],
        "Le champ date_panne est obligatoire."
    );
    assert!(body["errors"]["description_probleme"].is_array());
    assert!(body["errors"]["diagnostic_mecanicien"].is_array());
    assert!(body["errors"]["reparation_effectuee"].is_array());
    assert!(body["errors"]["statut_reparation"].is_array());
    Ok(())
}

#[tokio::test]
async fn e2e_crear_panne_statut_invalido() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/1/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "date_panne": "2025-03-10",
            "description_probleme": "Fuite",
            "diagnostic_mecanicien": "Joint usé",
            "reparation_effectuee": "Changement de joint",
            "statut_reparation": "resolved"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["errors"]["statut_reparation"].is_array());
    Ok(())
}

#[tokio::test]
async fn e2e_panne_update_parcial() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/3/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "date_panne": "2025-02-01",
            "description_probleme": "Frein qui siffle",
            "diagnostic_mecanicien": "Plaquettes usées",
            "reparation_effectuee": "En attente de pièces",
            "statut_reparation": "en_attente_pieces",
            "prix_piece": 80000.0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().unwrap();

    // Solo se manda el statut: el resto se conserva
    let res = c
        .put(format!("{}/api/buses/3/breakdowns/{}", app.base_url, id))
        .bearer_auth(&token)
        .json(&json!({"statut_reparation": "terminee"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["statut_reparation"], "terminee");
    assert_eq!(updated["description_probleme"], "Frein qui siffle");
    assert_eq!(updated["prix_piece"], 80000.0);
    assert_eq!(updated["date_panne"], "2025-02-01");
    Ok(())
}

#[tokio::test]
async fn e2e_panne_otro_bus_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/1/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "date_panne": "2025-01-15",
            "description_probleme": "Démarreur HS",
            "diagnostic_mecanicien": "Solénoïde grillé",
            "reparation_effectuee": "Remplacement démarreur",
            "statut_reparation": "en_cours"
        }))
        .send()
        .await?;
    let id = res.json::<serde_json::Value>().await?["id"].as_i64().unwrap();

    // Mismo id, otro bus: 404
    let res = c
        .put(format!("{}/api/buses/2/breakdowns/{}", app.base_url, id))
        .bearer_auth(&token)
        .json(&json!({"statut_reparation": "terminee"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Panne non trouvée");

    let res = c
        .delete(format!("{}/api/buses/2/breakdowns/{}", app.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_panne_delete_y_doble_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/4/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "date_panne": "2025-04-02",
            "description_probleme": "Pneu crevé",
            "diagnostic_mecanicien": "Clou dans le pneu",
            "reparation_effectuee": "Pneu remplacé",
            "statut_reparation": "terminee"
        }))
        .send()
        .await?;
    let id = res.json::<serde_json::Value>().await?["id"].as_i64().unwrap();

    let res = c
        .delete(format!("{}/api/buses/4/breakdowns/{}", app.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Panne supprimée avec succès");

    // Segundo delete: ya no existe
    let res = c
        .delete(format!("{}/api/buses/4/breakdowns/{}", app.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_pannes_orden_descendente_con_empates() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let payloads = [
        ("2025-01-05", "primera"),
        ("2025-03-01", "mas reciente"),
        ("2025-01-05", "empate con primera"),
    ];
    for (date, description) in payloads {
        let res = c
            .post(format!("{}/api/buses/9/breakdowns", app.base_url))
            .bearer_auth(&token)
            .json(&json!({
                "date_panne": date,
                "description_probleme": description,
                "diagnostic_mecanicien": "diag",
                "reparation_effectuee": "rep",
                "statut_reparation": "en_cours"
            }))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    // Otro bus: no debe aparecer en la lista del bus 9
    let res = c
        .post(format!("{}/api/buses/10/breakdowns", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "date_panne": "2025-06-01",
            "description_probleme": "otro bus",
            "diagnostic_mecanicien": "diag",
            "reparation_effectuee": "rep",
            "statut_reparation": "en_cours"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);

    let res = c
        .get(format!("{}/api/buses/9/breakdowns", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 3);
    // Descendente por fecha; los empates conservan el orden de inserción
    assert_eq!(list[0]["description_probleme"], "mas reciente");
    assert_eq!(list[1]["description_probleme"], "primera");
    assert_eq!(list[2]["description_probleme"], "empate con primera");
    Ok(())
}

#[tokio::test]
async fn e2e_visite_technique_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/2/technical-visits", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "visit_date": "2025-01-10",
            "expiry_date": "2026-01-10",
            "result": "Favorable",
            "visit_center": "Centre de contrôle Dakar",
            "cost": 25000.0,
            "certificate_number": "CT-2025-0042"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["bus_id"], 2);
    assert_eq!(created["result"], "Favorable");
    let id = created["id"].as_i64().unwrap();

    let res = c
        .put(format!(
            "{}/api/buses/2/technical-visits/{}",
            app.base_url, id
        ))
        .bearer_auth(&token)
        .json(&json!({"result": "Défavorable"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["result"], "Défavorable");
    assert_eq!(updated["visit_center"], "Centre de contrôle Dakar");

    let res = c
        .delete(format!(
            "{}/api/buses/2/technical-visits/{}",
            app.base_url, id
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Visite technique supprimée avec succès");
    Ok(())
}

#[tokio::test]
async fn e2e_visite_expiry_anterieure() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    // expiry == visit_date también es inválido (after estricto)
    let res = c
        .post(format!("{}/api/buses/1/technical-visits", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "visit_date": "2025-01-10",
            "expiry_date": "2025-01-10",
            "result": "Favorable"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body["errors"]["expiry_date"][0],
        "Le champ expiry_date doit être une date postérieure à visit_date."
    );
    Ok(())
}

#[tokio::test]
async fn e2e_visite_update_fechas_efectivas() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/5/technical-visits", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "visit_date": "2025-01-10",
            "expiry_date": "2026-01-10",
            "result": "Favorable"
        }))
        .send()
        .await?;
    let id = res.json::<serde_json::Value>().await?["id"].as_i64().unwrap();

    // Solo se manda expiry_date: se compara contra la visit_date guardada
    let res = c
        .put(format!(
            "{}/api/buses/5/technical-visits/{}",
            app.base_url, id
        ))
        .bearer_auth(&token)
        .json(&json!({"expiry_date": "2024-12-31"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["errors"]["expiry_date"].is_array());
    Ok(())
}

#[tokio::test]
async fn e2e_assurance_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/6/insurance-records", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "insurance_company": "AXA Sénégal",
            "policy_number": "POL-2025-118",
            "start_date": "2025-01-01",
            "expiry_date": "2026-01-01",
            "coverage_type": "Tous risques",
            "premium": 1200000.0
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["insurance_company"], "AXA Sénégal");
    let id = created["id"].as_i64().unwrap();

    // expiry <= start sobre los valores efectivos del merge
    let res = c
        .put(format!(
            "{}/api/buses/6/insurance-records/{}",
            app.base_url, id
        ))
        .bearer_auth(&token)
        .json(&json!({"expiry_date": "2024-06-01"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(
        body["errors"]["expiry_date"][0],
        "Le champ expiry_date doit être une date postérieure à start_date."
    );

    let res = c
        .delete(format!(
            "{}/api/buses/6/insurance-records/{}",
            app.base_url, id
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Assurance supprimée avec succès");
    Ok(())
}

#[tokio::test]
async fn e2e_assurance_campos_faltantes() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/1/insurance-records", app.base_url))
        .bearer_auth(&token)
        .json(&json!({"notes": "sans données"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["errors"]["insurance_company"].is_array());
    assert!(body["errors"]["policy_number"].is_array());
    assert!(body["errors"]["start_date"].is_array());
    assert!(body["errors"]["expiry_date"].is_array());
    assert!(body["errors"]["coverage_type"].is_array());
    assert!(body["errors"]["premium"].is_array());
    Ok(())
}

#[tokio::test]
async fn e2e_vidange_crud() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/8/vidanges", app.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "type": "Vidange complète",
            "vidange_date": "2025-05-20",
            "next_vidange_date": "2025-08-20",
            "cost": 45000.0,
            "mileage": 148000.0,
            "service_provider": "Garage Khadim"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    assert_eq!(created["type"], "Vidange complète");
    assert_eq!(created["bus_id"], 8);
    let id = created["id"].as_i64().unwrap();

    let res = c
        .put(format!("{}/api/buses/8/vidanges/{}", app.base_url, id))
        .bearer_auth(&token)
        .json(&json!({"cost": 50000.0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["cost"], 50000.0);
    assert_eq!(updated["service_provider"], "Garage Khadim");

    let res = c
        .delete(format!("{}/api/buses/8/vidanges/{}", app.base_url, id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Vidange supprimée avec succès");
    Ok(())
}

#[tokio::test]
async fn e2e_vidange_type_requerido() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .post(format!("{}/api/buses/1/vidanges", app.base_url))
        .bearer_auth(&token)
        .json(&json!({"cost": 45000.0}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["errors"]["type"][0], "Le champ type est obligatoire.");
    Ok(())
}

#[tokio::test]
async fn e2e_vidanges_sin_fecha_al_final() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let payloads = [
        json!({"type": "planificada", "planned_date": "2025-09-01"}),
        json!({"type": "reciente", "vidange_date": "2025-06-15"}),
        json!({"type": "antigua", "vidange_date": "2025-02-10"}),
    ];
    for payload in &payloads {
        let res = c
            .post(format!("{}/api/buses/11/vidanges", app.base_url))
            .bearer_auth(&token)
            .json(payload)
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
    }

    let res = c
        .get(format!("{}/api/buses/11/vidanges", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(list.len(), 3);
    // Descendente por vidange_date; las que no tienen fecha van al final
    assert_eq!(list[0]["type"], "reciente");
    assert_eq!(list[1]["type"], "antigua");
    assert_eq!(list[2]["type"], "planificada");
    Ok(())
}

#[tokio::test]
async fn e2e_lista_vacia() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let token = login_token(&c, &app.base_url).await?;

    let res = c
        .get(format!("{}/api/buses/42/vidanges", app.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let list = res.json::<Vec<serde_json::Value>>().await?;
    assert!(list.is_empty());
    Ok(())
}
