// ── API-to-domain type conversions ──
//
// Bridges raw `salesdash_api` wire types into canonical `model` types.
// Unknown enum strings fall back to defaults instead of failing the load.

use salesdash_api::{
    IntegrationDto, RegionStatDto, RegisteredUsersDto, SalesDataPointDto, SalesMetricDto,
    SalesOverviewDto,
};
use tracing::warn;

use crate::model::{
    ChangeType, Integration, RegisteredUsers, SaleMetric, SaleRegion, SalesDataPoint,
    SalesOverview,
};

impl From<SalesMetricDto> for SaleMetric {
    fn from(dto: SalesMetricDto) -> Self {
        let change_type = dto.change_type.parse().unwrap_or_else(|_| {
            warn!(raw = %dto.change_type, title = %dto.title, "unknown change type, using equal");
            ChangeType::default()
        });
        Self {
            title: dto.title,
            value: dto.value,
            currency: dto.currency,
            percentage_change: dto.percentage_change,
            change_type,
            description: dto.description,
        }
    }
}

impl From<SalesDataPointDto> for SalesDataPoint {
    fn from(dto: SalesDataPointDto) -> Self {
        Self {
            month: dto.month,
            revenue: dto.revenue,
            target: dto.target,
        }
    }
}

impl From<SalesOverviewDto> for SalesOverview {
    fn from(dto: SalesOverviewDto) -> Self {
        Self {
            total_revenue: dto.total_revenue,
            total_target: dto.total_target,
            data: dto.data.into_iter().map(SalesDataPoint::from).collect(),
        }
    }
}

impl From<RegionStatDto> for SaleRegion {
    fn from(dto: RegionStatDto) -> Self {
        Self {
            name: dto.name,
            value: dto.value,
        }
    }
}

impl From<RegisteredUsersDto> for RegisteredUsers {
    fn from(dto: RegisteredUsersDto) -> Self {
        Self {
            total: dto.total,
            premium: dto.premium,
            basic: dto.basic,
        }
    }
}

impl From<IntegrationDto> for Integration {
    fn from(dto: IntegrationDto) -> Self {
        Self {
            id: dto.id,
            application: dto.application,
            logo: dto.logo,
            kind: dto.kind,
            rate: dto.rate,
            profit: dto.profit,
            is_selected: dto.is_selected.unwrap_or(false),
        }
    }
}
