//! Built-in sample content for `--demo`.

use backoffice_client::MemoryApi;
use backoffice_model::{
    Banner, BlogPost, Career, Certification, Client, ContactRequest, Faq, Partner, Project,
    Record, Service, Solution, Stat, TeamMember, Testimonial,
};
use serde_json::{Map, Value};

const DEMO_DATA: &str = include_str!("../data/demo.json");

/// A memory backend holding the sample records of every domain.
pub fn seeded() -> anyhow::Result<MemoryApi> {
    let data: Map<String, Value> = serde_json::from_str(DEMO_DATA)?;
    let api = MemoryApi::new();
    seed::<Banner>(&api, &data)?;
    seed::<BlogPost>(&api, &data)?;
    seed::<Career>(&api, &data)?;
    seed::<Certification>(&api, &data)?;
    seed::<Client>(&api, &data)?;
    seed::<ContactRequest>(&api, &data)?;
    seed::<Faq>(&api, &data)?;
    seed::<Partner>(&api, &data)?;
    seed::<Project>(&api, &data)?;
    seed::<Service>(&api, &data)?;
    seed::<Solution>(&api, &data)?;
    seed::<Stat>(&api, &data)?;
    seed::<TeamMember>(&api, &data)?;
    seed::<Testimonial>(&api, &data)?;
    Ok(api)
}

fn seed<T: Record>(api: &MemoryApi, data: &Map<String, Value>) -> anyhow::Result<()> {
    let Some(value) = data.get(T::DOMAIN.as_str()) else {
        return Ok(());
    };
    let records: Vec<T> = serde_json::from_value(value.clone())
        .map_err(|e| anyhow::anyhow!("demo {}: {e}", T::DOMAIN))?;
    api.insert_all(&records)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use backoffice_model::Domain;

    #[test]
    fn every_domain_has_samples() {
        let data: Map<String, Value> = serde_json::from_str(DEMO_DATA).unwrap();
        for domain in Domain::ALL {
            let records = data.get(domain.as_str()).and_then(Value::as_array);
            assert!(records.is_some_and(|r| !r.is_empty()), "{domain} has no samples");
        }
    }

    #[test]
    fn samples_decode() {
        let api = seeded().unwrap();
        assert_eq!(api.records::<Faq>().unwrap().len(), 3);
        assert!(api.records::<BlogPost>().unwrap().iter().any(|p| p.view_count > 0));
    }
}
